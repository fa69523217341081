//! Replace an article's text with a file's content and submit it.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use wikibot_core::Dotfile;

#[derive(Parser)]
#[command(name = "wikipost", about = "Post a file's content as an article")]
struct Args {
    /// Article name
    article: String,

    /// File whose content replaces the article text
    file: PathBuf,

    /// Change summary
    summary: String,

    /// Mark the edit as minor
    #[arg(long)]
    minor: bool,

    /// Add the article to the watchlist
    #[arg(long)]
    watch: bool,

    /// Wiki profile from the dotfile (defaults to MEDIAWIKI_WIKI or the
    /// dotfile's default entry)
    #[arg(long)]
    wiki: Option<String>,
}

fn main() -> Result<()> {
    wikibot_core::init_logging();
    let args = Args::parse();

    let text = fs::read_to_string(&args.file)?;
    let dotfile = Dotfile::load()?;
    let wiki = dotfile.wiki(args.wiki.as_deref())?;

    let mut page = wiki.article(&args.article)?;
    page.set_text(text);
    page.submit(&args.summary, args.minor, args.watch)?;
    Ok(())
}
