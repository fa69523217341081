//! Print an article's wikitext to stdout.

use anyhow::Result;
use clap::Parser;
use wikibot_core::Dotfile;

#[derive(Parser)]
#[command(name = "wikicat", about = "Print the wikitext of an article")]
struct Args {
    /// Article name
    article: String,

    /// Wiki profile from the dotfile (defaults to MEDIAWIKI_WIKI or the
    /// dotfile's default entry)
    #[arg(long)]
    wiki: Option<String>,
}

fn main() -> Result<()> {
    wikibot_core::init_logging();
    let args = Args::parse();

    let dotfile = Dotfile::load()?;
    let wiki = dotfile.wiki(args.wiki.as_deref())?;
    let page = wiki.article(&args.article)?;
    println!("{}", page.text().unwrap_or_default());
    Ok(())
}
