//! # Interaction Session
//!
//! Drives one customer from the menu to the printed ticket.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌────────────────┐        ┌────────────────┐                          │
//! │   │ SelectingItems │───────►│ AskingContinue │── sí ──┐                 │
//! │   └────────────────┘        └───────┬────────┘        │                 │
//! │           ▲                         │ no              │                 │
//! │           └─────────────────────────┼─────────────────┘                 │
//! │                                     ▼                                   │
//! │                              ┌────────────┐   empty   ┌─────────┐       │
//! │                              │ Finalizing │──────────►│ NoOrder │       │
//! │                              └─────┬──────┘           └─────────┘       │
//! │                                    ▼                                    │
//! │                              ┌───────────┐                              │
//! │                              │ AskingTip │── no ───────────┐            │
//! │                              └─────┬─────┘                 │            │
//! │                                    │ sí                    │            │
//! │                                    ▼                       ▼            │
//! │                        ┌───────────────────┐     ┌────────────────┐     │
//! │                        │ ReadingTipPercent │────►│ ComputingTotal │     │
//! │                        └───────────────────┘     └───────┬────────┘     │
//! │                                                          ▼              │
//! │                                                 ┌─────────────────┐     │
//! │                                                 │ PrintingReceipt │──►Done
//! │                                                 └─────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use caldero_core::{CoreError, Menu, Order, Receipt, TipRate};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::config::TerminalConfig;
use crate::error::AppResult;
use crate::prompt::Prompter;

/// ANSI: clear screen, cursor to top-left.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

const NO_ORDER_MESSAGE: &str = "\nNo se realizaron pedidos. Hasta luego.";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// No dish was ever ordered; no tip prompt, no ticket.
    NoOrder,
    /// Ticket printed.
    Completed(Receipt),
}

/// States of the interaction loop.
#[derive(Debug)]
enum State {
    SelectingItems,
    AskingContinue,
    Finalizing,
    AskingTip,
    ReadingTipPercent,
    ComputingTotal(Option<TipRate>),
    PrintingReceipt(Receipt),
    NoOrder,
}

/// One customer's walk through menu, order, tip, and ticket.
pub struct Session<'a, R, W> {
    config: &'a TerminalConfig,
    menu: &'a Menu,
    prompter: Prompter<R, W>,
    order: Order,
    clock: fn() -> NaiveDateTime,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a TerminalConfig, menu: &'a Menu, prompter: Prompter<R, W>) -> Self {
        Session {
            config,
            menu,
            prompter,
            order: Order::new(),
            clock: local_now,
        }
    }

    /// Replaces the clock used to stamp the receipt.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the session to a terminal state.
    pub fn run(&mut self) -> AppResult<SessionOutcome> {
        info!(store = %self.config.store_name, dishes = self.menu.len(), "Session started");
        self.prompter.say(&self.config.welcome_banner)?;

        let mut state = State::SelectingItems;
        loop {
            debug!(?state, "Session step");
            state = match state {
                // Nothing to choose from: skip straight to the empty-order check.
                State::SelectingItems if self.menu.is_empty() => State::Finalizing,
                State::SelectingItems => {
                    self.select_item()?;
                    State::AskingContinue
                }
                State::AskingContinue => {
                    if self
                        .prompter
                        .read_yes_no("\n¿Desea agregar otro platillo? (s/n): ")?
                    {
                        State::SelectingItems
                    } else {
                        State::Finalizing
                    }
                }
                State::Finalizing => {
                    if self.order.is_empty() {
                        State::NoOrder
                    } else {
                        State::AskingTip
                    }
                }
                State::AskingTip => {
                    if self.prompter.read_yes_no("\n¿Desea dejar propina? (s/n): ")? {
                        State::ReadingTipPercent
                    } else {
                        State::ComputingTotal(None)
                    }
                }
                State::ReadingTipPercent => {
                    let percent = self.prompter.read_bounded_decimal(
                        "Ingrese el porcentaje de propina (%): ",
                        self.config.min_tip_percent,
                        self.config.max_tip_percent,
                    )?;
                    let rate = TipRate::checked(percent)?;
                    info!(%rate, "Tip requested");
                    State::ComputingTotal(Some(rate))
                }
                State::ComputingTotal(tip_rate) => {
                    let receipt = Receipt::build(&self.order, tip_rate, (self.clock)())?;
                    info!(
                        subtotal = %receipt.subtotal,
                        tip = %receipt.tip,
                        total = %receipt.total,
                        "Receipt built"
                    );
                    State::PrintingReceipt(receipt)
                }
                State::PrintingReceipt(receipt) => {
                    self.print_receipt(&receipt)?;
                    return Ok(SessionOutcome::Completed(receipt));
                }
                State::NoOrder => {
                    info!("Session ended without an order");
                    self.prompter.say(NO_ORDER_MESSAGE)?;
                    return Ok(SessionOutcome::NoOrder);
                }
            };
        }
    }

    /// Gives back the prompter, e.g. to inspect captured output.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Shows the menu, reads a dish and a quantity, and adds them.
    fn select_item(&mut self) -> AppResult<()> {
        self.prompter.write_raw(&self.menu.render(&self.config.currency))?;

        let dishes = self.menu.len();
        let position = self.prompter.read_bounded_integer(
            &format!(
                "Seleccione el número del platillo que desea pedir (1-{}): ",
                dishes
            ),
            1,
            dishes as i64,
        )?;
        let item = usize::try_from(position)
            .ok()
            .and_then(|p| self.menu.by_position(p))
            .ok_or(CoreError::UnknownItem(position.max(0) as usize))?;
        let name = self
            .menu
            .get(item)
            .map(|dish| dish.name().to_string())
            .unwrap_or_default();

        let quantity = self.prompter.read_bounded_integer(
            &format!("¿Cuántas órdenes de {} desea?: ", name),
            1,
            self.config.max_quantity,
        )?;

        self.order.add(self.menu, item, quantity)?;
        info!(
            dish = %name,
            quantity,
            lines = self.order.line_count(),
            portions = self.order.total_quantity(),
            "Item added"
        );
        Ok(())
    }

    fn print_receipt(&mut self, receipt: &Receipt) -> AppResult<()> {
        if self.config.clear_before_ticket {
            self.prompter.write_raw(CLEAR_SCREEN)?;
        }
        self.prompter.write_raw(&receipt.render(&self.config.currency))?;

        match serde_json::to_string(receipt) {
            Ok(json) => debug!(receipt = %json, "Receipt printed"),
            Err(err) => debug!(error = %err, "Receipt could not be serialized for logging"),
        }
        Ok(())
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Runs a session over stdin/stdout with the house menu.
pub fn run_stdio(config: &TerminalConfig) -> AppResult<SessionOutcome> {
    let menu = Menu::house();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    Session::new(config, &menu, prompter).run()
}
