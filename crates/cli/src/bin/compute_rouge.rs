use anyhow::Result;

fn main() -> Result<()> {
    rcsum_cli::command::compute_rouge::main_entry()
}
