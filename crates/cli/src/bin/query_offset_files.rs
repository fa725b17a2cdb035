use anyhow::Result;

fn main() -> Result<()> {
    rcsum_cli::command::query_offset_files::main_entry()
}
