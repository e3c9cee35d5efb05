//! The calculator's input state machine.

use tracing::{debug, warn};

use super::format::{NumberFormat, format_for_display, stringify_result};
use super::operator::Operator;

/// Shown in place of the current operand after a failed computation.
pub const ERROR_SENTINEL: &str = "Error";

/// Behaviourally distinct phases of a calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    EnteringFirstOperand,
    OperatorChosen,
    EnteringSecondOperand,
    Result,
    Error,
}

/// The two strings a front end renders after every input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    /// Formatted current operand (or `Error`).
    pub current: String,
    /// Pending left operand followed by the operator glyph, if any.
    pub previous: String,
}

/// Two-operand calculator state.
#[derive(Clone, Debug)]
pub struct Calculator {
    current: String,
    previous: String,
    operator: Option<Operator>,
    /// Next digit replaces the current operand instead of extending it.
    reset: bool,
    /// The current operand is an untouched computed value.
    showing_result: bool,
    format: NumberFormat,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(NumberFormat::default())
    }
}

impl Calculator {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operator: None,
            reset: false,
            showing_result: false,
            format,
        }
    }

    /// The raw current operand.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The raw pending left operand; empty when none.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_error(&self) -> bool {
        self.current == ERROR_SENTINEL
    }

    pub fn mode(&self) -> Mode {
        if self.is_error() {
            Mode::Error
        } else if self.operator.is_some() {
            if self.current.is_empty() {
                Mode::OperatorChosen
            } else {
                Mode::EnteringSecondOperand
            }
        } else if self.showing_result {
            Mode::Result
        } else {
            Mode::EnteringFirstOperand
        }
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// The caller must not pass a point when the operand already has one.
    pub fn append_digit_or_point(&mut self, token: char) {
        if self.current == "0" || self.reset {
            self.current = token.to_string();
            self.reset = false;
        } else {
            self.current.push(token);
        }
        self.showing_result = false;
    }

    /// Select an operator, first resolving any pending operation so that
    /// chains evaluate left to right.
    ///
    /// If that pending operation fails, the new operator is discarded and
    /// the calculator stays in the error state.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.current.is_empty() {
            return;
        }
        if !self.previous.is_empty() {
            self.compute();
            if self.is_error() {
                return;
            }
        }

        debug!(operand = %self.current, operator = ?op, "operator chosen");
        self.operator = Some(op);
        self.previous = std::mem::take(&mut self.current);
        self.showing_result = false;
    }

    /// Evaluate `previous <operator> current`.
    ///
    /// Does nothing unless both operands parse and an operator is pending.
    pub fn compute(&mut self) {
        let (Ok(lhs), Ok(rhs)) = (
            self.previous.parse::<f64>(),
            self.current.parse::<f64>(),
        ) else {
            return;
        };
        let Some(op) = self.operator else {
            return;
        };

        match op.apply(lhs, rhs) {
            Ok(value) => {
                self.current = stringify_result(value);
                debug!(lhs, rhs, operator = ?op, result = %self.current, "computed");
                self.reset = true;
                self.showing_result = true;
            }
            Err(e) => {
                warn!(lhs, rhs, operator = ?op, "calculation failed: {}", e);
                self.current = ERROR_SENTINEL.to_string();
            }
        }

        self.previous.clear();
        self.operator = None;
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous.clear();
        self.operator = None;
        self.reset = false;
        self.showing_result = false;
    }

    /// Remove the last typed character; from the error state this is a
    /// full clear.
    ///
    /// Editing a result leaves the next digit starting a fresh operand.
    pub fn delete_last_char(&mut self) {
        if self.is_error() {
            self.clear();
            return;
        }

        self.showing_result = false;

        self.current.pop();
        if self.current.is_empty() {
            self.current = "0".to_string();
        }
    }

    /// Formatted current operand.
    pub fn current_display(&self) -> String {
        if self.is_error() {
            return ERROR_SENTINEL.to_string();
        }
        format_for_display(&self.current, &self.format)
    }

    /// Formatted left operand with the operator glyph, or the raw left
    /// operand when no operator is pending.
    pub fn previous_display(&self) -> String {
        match self.operator {
            Some(op) => format!(
                "{} {}",
                format_for_display(&self.previous, &self.format),
                op.glyph()
            ),
            None => self.previous.clone(),
        }
    }

    pub fn display(&self) -> Display {
        Display {
            current: self.current_display(),
            previous: self.previous_display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(calc: &mut Calculator, digits: &str) {
        for c in digits.chars() {
            calc.append_digit_or_point(c);
        }
    }

    fn assert_initial(calc: &Calculator) {
        assert_eq!(calc.current(), "0");
        assert_eq!(calc.previous(), "");
        assert_eq!(calc.operator(), None);
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::default();
        assert_initial(&calc);
        assert_eq!(calc.mode(), Mode::EnteringFirstOperand);
        assert_eq!(
            calc.display(),
            Display {
                current: "0".to_string(),
                previous: String::new(),
            }
        );
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "0012");
        assert_eq!(calc.current(), "12");
    }

    #[test]
    fn test_point_replaces_zero() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, ".5");
        assert_eq!(calc.current(), ".5");
        assert_eq!(calc.current_display(), "0.5");
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "12");
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.mode(), Mode::OperatorChosen);
        assert_eq!(calc.previous_display(), "12 +");
        assert_eq!(calc.current(), "");

        type_digits(&mut calc, "30");
        assert_eq!(calc.mode(), Mode::EnteringSecondOperand);
        calc.compute();
        assert_eq!(calc.current(), "42");
        assert_eq!(calc.previous(), "");
        assert_eq!(calc.operator(), None);
        assert_eq!(calc.mode(), Mode::Result);
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "2");
        calc.choose_operator(Operator::Multiply);
        type_digits(&mut calc, "3");
        calc.compute();
        assert_eq!(calc.current(), "6");

        type_digits(&mut calc, "9");
        assert_eq!(calc.current(), "9");
        assert_eq!(calc.mode(), Mode::EnteringFirstOperand);
    }

    #[test]
    fn test_chained_operators_evaluate_left_to_right() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "3");
        calc.choose_operator(Operator::Add);
        type_digits(&mut calc, "4");
        calc.choose_operator(Operator::Multiply);
        assert_eq!(calc.previous(), "7");
        assert_eq!(calc.operator(), Some(Operator::Multiply));
        assert_eq!(calc.previous_display(), "7 ×");

        type_digits(&mut calc, "2");
        calc.compute();
        assert_eq!(calc.current(), "14");
    }

    #[test]
    fn test_operator_without_operand_is_ignored() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        calc.choose_operator(Operator::Subtract);
        assert_eq!(calc.previous(), "5");
        assert_eq!(calc.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_equals_after_result_is_noop() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "7");
        calc.choose_operator(Operator::Subtract);
        type_digits(&mut calc, "10");
        calc.compute();
        assert_eq!(calc.current(), "-3");

        calc.compute();
        calc.compute();
        assert_eq!(calc.current(), "-3");
        assert_eq!(calc.mode(), Mode::Result);
    }

    #[test]
    fn test_compute_with_missing_operand_is_noop() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "8");
        calc.choose_operator(Operator::Divide);
        calc.compute();
        assert_eq!(calc.previous(), "8");
        assert_eq!(calc.current(), "");
        assert_eq!(calc.operator(), Some(Operator::Divide));

        calc.append_digit_or_point('.');
        calc.compute();
        assert_eq!(calc.current(), ".");
        assert_eq!(calc.operator(), Some(Operator::Divide));
    }

    #[test]
    fn test_divide_by_zero() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "8");
        calc.choose_operator(Operator::Divide);
        type_digits(&mut calc, "0");
        calc.compute();
        assert!(calc.is_error());
        assert_eq!(calc.mode(), Mode::Error);
        assert_eq!(calc.current_display(), "Error");
        assert_eq!(calc.previous(), "");
        assert_eq!(calc.operator(), None);
    }

    #[test]
    fn test_divide_by_zero_point_zero() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "1");
        calc.choose_operator(Operator::Divide);
        type_digits(&mut calc, "0.00");
        calc.compute();
        assert!(calc.is_error());
    }

    #[test]
    fn test_chain_into_error_stops() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "4");
        calc.choose_operator(Operator::Divide);
        type_digits(&mut calc, "0");
        calc.choose_operator(Operator::Add);
        assert!(calc.is_error());
        assert_eq!(calc.previous(), "");
        assert_eq!(calc.operator(), None);
    }

    #[test]
    fn test_delete_last_char() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "12");
        calc.delete_last_char();
        assert_eq!(calc.current(), "1");
        calc.delete_last_char();
        assert_eq!(calc.current(), "0");
        calc.delete_last_char();
        assert_eq!(calc.current(), "0");
    }

    #[test]
    fn test_editing_a_result_leaves_result_mode() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "5");
        calc.choose_operator(Operator::Subtract);
        type_digits(&mut calc, "8");
        calc.compute();
        assert_eq!(calc.mode(), Mode::Result);

        calc.delete_last_char();
        calc.delete_last_char();
        assert_eq!(calc.current(), "0");
        assert_eq!(calc.mode(), Mode::EnteringFirstOperand);

        let mut calc = Calculator::default();
        type_digits(&mut calc, "12");
        calc.choose_operator(Operator::Add);
        type_digits(&mut calc, "34");
        calc.compute();
        calc.delete_last_char();
        assert_eq!(calc.current(), "4");
        type_digits(&mut calc, "7");
        assert_eq!(calc.current(), "7");
    }

    #[test]
    fn test_delete_from_error_clears() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "8");
        calc.choose_operator(Operator::Divide);
        type_digits(&mut calc, "0");
        calc.compute();
        calc.delete_last_char();
        assert_initial(&calc);
    }

    #[test]
    fn test_clear_from_any_state() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "123");
        calc.clear();
        assert_initial(&calc);

        type_digits(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        type_digits(&mut calc, "6");
        calc.clear();
        assert_initial(&calc);

        type_digits(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        type_digits(&mut calc, "6");
        calc.compute();
        calc.clear();
        assert_initial(&calc);
        assert_eq!(calc.mode(), Mode::EnteringFirstOperand);

        type_digits(&mut calc, "5");
        calc.choose_operator(Operator::Divide);
        type_digits(&mut calc, "0");
        calc.compute();
        calc.clear();
        assert_initial(&calc);
    }

    #[test]
    fn test_result_display_is_grouped() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "1000");
        calc.choose_operator(Operator::Multiply);
        type_digits(&mut calc, "1000.5");
        assert_eq!(calc.previous_display(), "1,000 ×");
        assert_eq!(calc.current_display(), "1,000.5");
        calc.compute();
        assert_eq!(calc.current(), "1000500");
        assert_eq!(calc.current_display(), "1,000,500");
        assert_eq!(calc.previous_display(), "");
    }

    #[test]
    fn test_floating_point_result() {
        let mut calc = Calculator::default();
        type_digits(&mut calc, "0.1");
        calc.choose_operator(Operator::Add);
        type_digits(&mut calc, "0.2");
        calc.compute();
        assert_eq!(calc.current(), "0.30000000000000004");
    }
}
