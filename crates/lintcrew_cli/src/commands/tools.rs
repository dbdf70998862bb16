//! Tools command implementation

use miette::Result;

use lintcrew_core::{Problems, ToolOptions, tools};

pub fn run_tools() -> Result<()> {
    for name in tools::available_tools() {
        let Some(tool) = tools::build_tool(name, Problems::shared(), ToolOptions::new()) else {
            continue;
        };
        let status = if tool.check_dependencies() {
            "available"
        } else {
            "not installed"
        };
        println!("{name:<12} {status}");
    }
    Ok(())
}
