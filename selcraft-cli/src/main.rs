//! selcraft CLI
//!
//! Builds a CSS selector from typed parts and prints it.

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use selcraft_common::serialize;
use selcraft_common::warning::clear_warnings;
use selcraft_css::{Combinator, CompoundSelector, PartKind, Selector, SelectorPart};

/// selcraft: build a CSS selector from typed parts
#[derive(Parser, Debug)]
#[command(name = "selcraft")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # div#main.container.draggable
    selcraft element=div id=main class=container class=draggable

    # a[href$=".png"]:focus
    selcraft element=a 'attr=href$=".png"' pseudo-class=focus

    # ul > li   a
    selcraft element=ul 'combine=>' element=li 'combine= ' element=a

    # Structured output
    selcraft --json element=p pseudo-element=first-line
"#)]
struct Cli {
    /// Parts in order: element=, id=, class=, attr=, pseudo-class=, pseudo-element=,
    /// or combine=<symbol> to start the next compound selector
    #[arg(value_name = "KIND=VALUE", required = true, value_parser = parse_token)]
    tokens: Vec<Token>,

    /// Print the selector structure as JSON instead of the selector string
    #[arg(short, long)]
    json: bool,
}

/// One command-line argument.
#[derive(Debug, Clone)]
enum Token {
    Part(SelectorPart),
    Combine(Combinator),
}

fn parse_token(arg: &str) -> Result<Token, String> {
    let (kind, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got `{arg}`"))?;
    if kind == "combine" {
        return Ok(Token::Combine(Combinator::from_symbol(value)));
    }
    let kind: PartKind = kind
        .parse()
        .map_err(|_| format!("unknown part kind `{kind}`"))?;
    Ok(Token::Part(SelectorPart::new(kind, value)))
}

/// Fold the tokens into a selector. Combinators associate to the right:
/// `a + b ~ c` is `combine(a, "+", combine(b, "~", c))`.
fn build_selector(tokens: &[Token]) -> Result<Selector> {
    let mut pending: Vec<(CompoundSelector, Combinator)> = Vec::new();
    let mut current = CompoundSelector::new();

    for (index, token) in tokens.iter().enumerate() {
        let position = index + 1;
        match token {
            Token::Part(part) => current
                .push(part.clone())
                .with_context(|| format!("argument {position} (`{part}`) rejected"))?,
            Token::Combine(combinator) => {
                if current.is_empty() {
                    bail!("argument {position}: combinator `{combinator}` has no selector on its left");
                }
                pending.push((std::mem::take(&mut current), combinator.clone()));
            }
        }
    }

    if current.is_empty() {
        if pending.is_empty() {
            bail!("no selector parts given");
        }
        bail!("no selector parts after the last combinator");
    }

    let mut selector = Selector::from(current);
    while let Some((left, combinator)) = pending.pop() {
        selector = Selector::from(left).combine(combinator, selector);
    }
    Ok(selector)
}

fn run(cli: &Cli) -> Result<()> {
    let selector = build_selector(&cli.tokens)?;
    if cli.json {
        println!("{}", serialize(&selector)?);
    } else {
        println!("{selector}");
    }
    Ok(())
}

fn main() {
    // Combinator symbols are mapped (and warned about) while clap parses arguments.
    clear_warnings();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
