use console::style;

use crate::output::Output;

const RULE: &str = "⬢⬡";

pub fn print_banner(output: &Output) {
    let rule = RULE.repeat(30);
    output.writeln(&style(&rule).cyan().to_string());
    output.writeln("");
    output.writeln(&format!(
        "    {}",
        style("Nexus Repository Firewall Policy Tester").bold()
    ));
    output.writeln("");
    output.writeln(&format!(
        "    Running on:  {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    ));
    output.writeln(&format!("    Version:     {}", env!("CARGO_PKG_VERSION")));
    output.writeln("");
    output.writeln(&style(&rule).cyan().to_string());
}
