use std::process::ExitCode;

use lexis_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    lexis_driver::run(argument)
}
