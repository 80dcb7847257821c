use anyhow::Result;
use booklet_impose::{
    DocumentProvider, PdfProvider, calculate_statistics, impose, impose_booklet, load_pdf,
    write_booklet,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "booklet",
    about = "Reorder PDF pages for saddle-stitch booklet printing",
    version
)]
struct Cli {
    /// Input PDF file
    #[arg(short, long)]
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Print the placement plan as JSON, don't generate PDF
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let document = load_pdf(&cli.input).await?;
    let page_count = document.get_pages().len();

    let stats = calculate_statistics(page_count)?;
    println!("Booklet statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Padded pages: {}", stats.padded_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Sheets: {}", stats.sheets);

    if cli.stats_only {
        return Ok(());
    }

    if cli.dry_run {
        let provider = PdfProvider::new(&document);
        let reference = provider.page_size(0)?;
        let plan = impose_booklet(page_count, reference)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let bytes = impose(&document).await?;
    write_booklet(bytes, &cli.output).await?;
    println!("Imposed → {}", cli.output.display());

    Ok(())
}
