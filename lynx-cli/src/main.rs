//! Lynx CLI
//!
//! Builds one CSS selector from an ordered list of steps and prints it.

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use lynx_css::{CompoundSelector, PartKind, Selector, SelectorBuilder};
use owo_colors::OwoColorize;

/// Lynx — assemble a CSS selector part by part
#[derive(Parser, Debug)]
#[command(name = "lynx")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"STEPS:
    KIND=VALUE    add a part to the current compound selector, where KIND is
                  element, id, class, attr, pseudo-class or pseudo-element
    COMBINATOR    close the current compound selector and start the next one:
                  descendant, child (>), next-sibling (+), subsequent-sibling (~)

EXAMPLES:
    # a[href$=".png"]:focus
    lynx element=a 'attr=href$=".png"' pseudo-class=focus

    # ul.nav > li:first-child
    lynx element=ul class=nav '>' element=li pseudo-class=first-child

    # Dump the selector tree as JSON
    lynx --json element=tr descendant element=td
"#)]
struct Cli {
    /// Parts and combinators, in order
    #[arg(value_name = "STEP", required = true)]
    steps: Vec<String>,

    /// Print the selector tree as JSON instead of selector text
    #[arg(long)]
    json: bool,

    /// Also print the selector's specificity
    #[arg(short, long)]
    specificity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Part(PartKind, String),
    Join(&'static str),
}

fn combinator_token(raw: &str) -> Option<&'static str> {
    match raw {
        "descendant" | " " => Some(" "),
        "child" | ">" => Some(">"),
        "next-sibling" | "+" => Some("+"),
        "subsequent-sibling" | "~" => Some("~"),
        _ => None,
    }
}

fn parse_step(raw: &str) -> Result<Step> {
    if let Some(token) = combinator_token(raw) {
        return Ok(Step::Join(token));
    }

    let Some((name, value)) = raw.split_once('=') else {
        bail!("expected KIND=VALUE or a combinator, got {raw:?}");
    };
    let kind = name
        .parse::<PartKind>()
        .with_context(|| format!("unknown part kind {name:?}"))?;

    Ok(Step::Part(kind, value.to_string()))
}

/// Combinators nest to the right: `a > b + c` becomes `a > (b + c)`.
fn assemble(steps: &[Step]) -> Result<Selector> {
    let mut closed: Vec<(CompoundSelector, &'static str)> = Vec::new();
    let mut current: Option<CompoundSelector> = None;

    for (index, step) in steps.iter().enumerate() {
        let position = index + 1;
        match step {
            Step::Part(kind, value) => {
                let compound = match current.take() {
                    None => CompoundSelector::from_part(*kind, value.as_str()),
                    Some(compound) => compound
                        .add(*kind, value.as_str())
                        .with_context(|| format!("step {position}: cannot add {kind} {value:?}"))?,
                };
                current = Some(compound);
            }
            Step::Join(token) => {
                let left = current.take().with_context(|| {
                    format!("step {position}: combinator {token:?} has no selector on its left")
                })?;
                closed.push((left, *token));
            }
        }
    }

    let mut selector = Selector::from(
        current.context("the last combinator has no selector on its right")?,
    );
    for (left, token) in closed.into_iter().rev() {
        selector = SelectorBuilder::combine(left, token, selector)?;
    }

    Ok(selector)
}

/// Everything the CLI prints on success, one line per output.
fn run(cli: &Cli) -> Result<String> {
    let steps = cli
        .steps
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_step(raw).with_context(|| format!("step {}", index + 1)))
        .collect::<Result<Vec<_>>>()?;

    let selector = assemble(&steps)?;

    let mut output = if cli.json {
        serde_json::to_string_pretty(&selector)?
    } else {
        selector.stringify()
    };

    if cli.specificity {
        output = format!("{output}\n{}", selector.specificity());
    }

    Ok(output)
}

fn error_line(err: &anyhow::Error) -> String {
    format!("{} {err:#}", "error:".red().bold())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lynx").chain(args.iter().copied())).unwrap()
    }

    fn steps(raw: &[&str]) -> Vec<Step> {
        raw.iter().map(|step| parse_step(step).unwrap()).collect()
    }

    #[test]
    fn test_parse_part_steps() {
        assert_eq!(
            parse_step(r#"attr=href$=".png""#).unwrap(),
            Step::Part(PartKind::Attribute, r#"href$=".png""#.to_string())
        );
        assert_eq!(
            parse_step("pseudo-class=nth-of-type(even)").unwrap(),
            Step::Part(PartKind::PseudoClass, "nth-of-type(even)".to_string())
        );
    }

    #[test]
    fn test_parse_combinator_steps() {
        assert_eq!(parse_step("descendant").unwrap(), Step::Join(" "));
        assert_eq!(parse_step(">").unwrap(), Step::Join(">"));
        assert_eq!(parse_step("next-sibling").unwrap(), Step::Join("+"));
        assert_eq!(parse_step("~").unwrap(), Step::Join("~"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_step("div").is_err());
        assert!(parse_step("tag=div").is_err());
    }

    #[test]
    fn test_assemble_nests_right() {
        let selector = assemble(&steps(&[
            "element=div",
            "id=main",
            "class=container",
            "class=draggable",
            "+",
            "element=table",
            "id=data",
            "~",
            "element=tr",
            "pseudo-class=nth-of-type(even)",
            "descendant",
            "element=td",
            "pseudo-class=nth-of-type(even)",
        ]))
        .unwrap();

        assert_eq!(
            selector.stringify(),
            "div#main.container.draggable + table#data ~ tr:nth-of-type(even) td:nth-of-type(even)"
        );
        let Selector::Combined(expression) = &selector else {
            panic!("expected a combinator expression");
        };
        assert!(expression.left().as_compound().is_some());
        assert!(expression.right().as_compound().is_none());
    }

    #[test]
    fn test_assemble_single_compound() {
        let selector = assemble(&steps(&["class=a", "class=b"])).unwrap();
        assert_eq!(selector.stringify(), ".a.b");
    }

    #[test]
    fn test_assemble_reports_failing_step() {
        let err = assemble(&steps(&["class=c", "element=div"])).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("step 2: cannot add element \"div\""), "{message}");
        assert!(message.contains("element cannot follow class"), "{message}");
    }

    #[test]
    fn test_assemble_rejects_dangling_combinators() {
        assert!(assemble(&steps(&[">", "element=li"])).is_err());
        assert!(assemble(&steps(&["element=ul", ">"])).is_err());
        assert!(assemble(&steps(&["element=ul", ">", "+", "element=li"])).is_err());
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_prints_selector_text() {
        let output = run(&cli(&["element=ul", "class=nav", ">", "element=li"])).unwrap();
        assert_eq!(output, "ul.nav > li");
    }

    #[test]
    fn test_run_with_specificity() {
        let output = run(&cli(&["--specificity", "id=main", "descendant", "class=item"])).unwrap();
        assert_eq!(output, "#main .item\n(1, 1, 0)");
    }

    #[test]
    fn test_run_with_json() {
        let output = run(&cli(&["--json", "element=tr", "descendant", "element=td"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["type"], "combined");
        assert_eq!(json["combinator"], "descendant");
        assert_eq!(json["left"]["parts"][0]["value"], "tr");
        assert_eq!(json["right"]["parts"][0]["kind"], "element");
    }

    #[test]
    fn test_run_error_line() {
        let err = run(&cli(&["tag=div"])).unwrap_err();
        let line = error_line(&err);
        assert!(line.contains("error:"), "{line}");
        assert!(line.contains("step 1: unknown part kind \"tag\""), "{line}");
    }

    #[test]
    fn test_requires_a_step() {
        assert!(Cli::try_parse_from(["lynx"]).is_err());
    }
}
