//! # Prompter
//!
//! The three validated-input readers, over any `BufRead` + `Write` pair.
//!
//! ## Retry Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop {                                                                 │
//! │      write prompt, flush                                                │
//! │      read one line ───────── EOF / I/O error ──► Err(io::Error)         │
//! │      parse (caldero_core::validation)                                   │
//! │        ├── Ok(value) ──────────────────────────► return Ok(value)       │
//! │        └── Err(InputError) ── print diagnostic, next iteration          │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A reader never returns an invalid value. The only way out other than a
//! valid value is an I/O error, which includes stdin reaching end of file.

use std::io::{self, BufRead, Write};

use caldero_core::validation::{parse_bounded_decimal, parse_bounded_integer, parse_yes_no};
use caldero_core::InputError;
use rust_decimal::Decimal;
use tracing::debug;

/// Line-oriented prompt/answer channel.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            line: String::new(),
        }
    }

    /// Reads a whole number in `min..=max`.
    pub fn read_bounded_integer(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<i64> {
        self.ask(prompt, |text| parse_bounded_integer(text, min, max))
    }

    /// Reads a decimal in `min..=max`; comma or period as decimal separator.
    pub fn read_bounded_decimal(
        &mut self,
        prompt: &str,
        min: Decimal,
        max: Decimal,
    ) -> io::Result<Decimal> {
        self.ask(prompt, |text| parse_bounded_decimal(text, min, max))
    }

    /// Reads s/si/n/no.
    pub fn read_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        self.ask(prompt, parse_yes_no)
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes `text` as is and flushes.
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Gives back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<T> {
        loop {
            self.write_raw(prompt)?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for an answer",
                ));
            }

            match parse(&self.line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(input = %self.line.trim_end(), error = ?err, "Rejected input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = p.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_integer_retries_until_valid() {
        let mut p = prompter("\nabc\n0\n6\n3\n");
        assert_eq!(p.read_bounded_integer("? ", 1, 5).unwrap(), 3);

        let out = output_of(p);
        assert_eq!(out.matches("? ").count(), 5);
        assert!(out.contains("Entrada vacía, intente de nuevo.\n"));
        assert!(out.contains("Entrada inválida, ingrese un número entero.\n"));
        assert_eq!(out.matches("Valor fuera de rango (1 - 5).\n").count(), 2);
    }

    #[test]
    fn test_decimal_accepts_comma_and_period() {
        let min = Decimal::ZERO;
        let max = Decimal::from(1000);

        let mut p = prompter("12,5\n12.5\n");
        let first = p.read_bounded_decimal("% ", min, max).unwrap();
        let second = p.read_bounded_decimal("% ", min, max).unwrap();
        assert_eq!(first, Decimal::new(125, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_decimal_rejects_then_accepts() {
        let mut p = prompter("mucho\n2000\n15\n");
        let value = p
            .read_bounded_decimal("% ", Decimal::ZERO, Decimal::from(1000))
            .unwrap();
        assert_eq!(value, Decimal::from(15));

        let out = output_of(p);
        assert!(out.contains("Entrada inválida, ingrese un número válido.\n"));
        assert!(out.contains("Valor fuera de rango (0 - 1000).\n"));
    }

    #[test]
    fn test_yes_no() {
        let mut p = prompter("S\nsi\nSI\nn\nNo\nNO\n");
        for expected in [true, true, true, false, false, false] {
            assert_eq!(p.read_yes_no("(s/n) ").unwrap(), expected);
        }
    }

    #[test]
    fn test_yes_no_rejects_unknown_answer() {
        let mut p = prompter("maybe\n\ns\n");
        assert!(p.read_yes_no("(s/n) ").unwrap());

        let out = output_of(p);
        assert!(out.contains("Respuesta inválida, responda 's' o 'n'.\n"));
        assert!(out.contains("Entrada vacía, intente de nuevo.\n"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut p = prompter("abc\n");
        let err = p.read_bounded_integer("? ", 1, 5).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("4");
        assert_eq!(p.read_bounded_integer("? ", 1, 5).unwrap(), 4);
    }
}
