use anyhow::Result;

fn main() -> Result<()> {
    rcsum_cli::command::convert_rcdata::main_entry()
}
