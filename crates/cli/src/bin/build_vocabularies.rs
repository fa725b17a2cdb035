use anyhow::Result;

fn main() -> Result<()> {
    rcsum_cli::command::build_vocabularies::main_entry()
}
