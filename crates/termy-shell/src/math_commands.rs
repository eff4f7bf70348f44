//! Math package commands: add, sub, mul, div over pairs of floats.
//!
//! Gated behind the `math` package. Arguments are the remainder split on
//! single spaces; exactly two tokens, each a valid `f64`.

use termy_types::error::{Result, TermyError};

use crate::interpreter::{Command, CommandOutput, Environment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
}

struct MathCmd {
    op: MathOp,
}

impl MathCmd {
    fn op_name(&self) -> &'static str {
        match self.op {
            MathOp::Add => "math.add",
            MathOp::Sub => "math.sub",
            MathOp::Mul => "math.mul",
            MathOp::Div => "math.div",
        }
    }
}

impl Command for MathCmd {
    fn name(&self) -> &str {
        self.op_name()
    }
    fn description(&self) -> &str {
        match self.op {
            MathOp::Add => "Add two numbers",
            MathOp::Sub => "Subtract the second number from the first",
            MathOp::Mul => "Multiply two numbers",
            MathOp::Div => "Divide the first number by the second",
        }
    }
    fn usage(&self) -> &str {
        match self.op {
            MathOp::Add => "math.add <num1> <num2>",
            MathOp::Sub => "math.sub <num1> <num2>",
            MathOp::Mul => "math.mul <num1> <num2>",
            MathOp::Div => "math.div <num1> <num2>",
        }
    }
    fn section(&self) -> &str {
        "Math Package"
    }
    fn package(&self) -> Option<&str> {
        Some("math")
    }
    fn execute(&self, rest: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let args: Vec<&str> = rest.split(' ').collect();
        if args.len() != 2 {
            return Err(TermyError::Usage(format!("{} <num1> <num2>", self.op_name())));
        }
        let (Ok(a), Ok(b)) = (args[0].parse::<f64>(), args[1].parse::<f64>()) else {
            return Err(TermyError::Command(format!(
                "Invalid arguments for {}",
                self.op_name()
            )));
        };
        let value = match self.op {
            MathOp::Add => a + b,
            MathOp::Sub => a - b,
            MathOp::Mul => a * b,
            MathOp::Div => {
                if b == 0.0 {
                    return Err(TermyError::Command("Division by zero".to_string()));
                }
                a / b
            },
        };
        Ok(CommandOutput::Lines(vec![format!("Result: {value}")]))
    }
}

pub(crate) fn math_rules() -> Vec<Box<dyn Command>> {
    [MathOp::Add, MathOp::Sub, MathOp::Mul, MathOp::Div]
        .into_iter()
        .map(|op| Box::new(MathCmd { op }) as Box<dyn Command>)
        .collect()
}

#[cfg(test)]
mod tests {
    use termy_platform::{ExecCapture, ProcessService};
    use termy_store::MemoryStore;
    use termy_types::error::Result;

    use super::*;

    struct NoProcess;
    impl ProcessService for NoProcess {
        fn run_shell(&self, _command_line: &str) -> Result<ExecCapture> {
            Err(std::io::Error::other("unused").into())
        }
        fn run_elevated(&self, _command_line: &str) -> Result<ExecCapture> {
            Err(std::io::Error::other("unused").into())
        }
    }

    fn run(op: MathOp, rest: &str) -> Result<CommandOutput> {
        let process = NoProcess;
        let store = MemoryStore::new();
        let mut env = Environment {
            process: &process,
            store: &store,
            time: None,
            data_dir: "/data".to_string(),
        };
        MathCmd { op }.execute(rest, &mut env)
    }

    fn lines(result: Result<CommandOutput>) -> Vec<String> {
        match result.unwrap() {
            CommandOutput::Lines(lines) => lines,
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn add_integers() {
        assert_eq!(lines(run(MathOp::Add, "2 3")), vec!["Result: 5"]);
    }

    #[test]
    fn sub_and_mul() {
        assert_eq!(lines(run(MathOp::Sub, "10 4.5")), vec!["Result: 5.5"]);
        assert_eq!(lines(run(MathOp::Mul, "3 -2")), vec!["Result: -6"]);
    }

    #[test]
    fn div_fraction() {
        assert_eq!(lines(run(MathOp::Div, "5 2")), vec!["Result: 2.5"]);
    }

    #[test]
    fn exponent_notation_accepted() {
        assert_eq!(lines(run(MathOp::Add, "1e2 1")), vec!["Result: 101"]);
    }

    #[test]
    fn div_by_zero_is_rejected() {
        match run(MathOp::Div, "4 0").unwrap_err() {
            TermyError::Command(msg) => assert_eq!(msg, "Division by zero"),
            other => panic!("expected command error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_token_count_is_usage_error() {
        match run(MathOp::Add, "1").unwrap_err() {
            TermyError::Usage(usage) => assert_eq!(usage, "math.add <num1> <num2>"),
            other => panic!("expected usage error, got {other:?}"),
        }
        assert!(run(MathOp::Add, "1 2 3").is_err());
    }

    #[test]
    fn double_space_counts_as_empty_token() {
        // Split on single spaces: "2  3" is three tokens, one empty.
        assert!(matches!(
            run(MathOp::Add, "2  3").unwrap_err(),
            TermyError::Usage(_)
        ));
    }

    #[test]
    fn unparseable_tokens_are_invalid_arguments() {
        match run(MathOp::Mul, "x 2").unwrap_err() {
            TermyError::Command(msg) => {
                assert_eq!(msg, "Invalid arguments for math.mul");
            },
            other => panic!("expected command error, got {other:?}"),
        }
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn finite_pairs_always_compute(a in -1e6f64..1e6, b in -1e6f64..1e6) {
                let rest = format!("{a} {b}");
                let out = lines(run(MathOp::Add, &rest));
                prop_assert_eq!(out.len(), 1);
                prop_assert!(out[0].starts_with("Result: "));
            }
        }
    }
}
