use turkname::{ClassificationResult, ClassificationVerbose, RuleInfo, Stage};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// One line per result followed by the summary.
pub fn print_batch(results: &[ClassificationResult], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    for (idx, result) in results.iter().enumerate() {
        print_result_line(idx, result, &palette);
    }
    print_summary(results, &palette);
}

/// Full per-rule trace for each name, then the summary.
pub fn print_verbose(runs: &[ClassificationVerbose], color: bool) {
    let palette = ansi::Palette::new(color);
    for (idx, run) in runs.iter().enumerate() {
        print_run(idx, run, &palette);
    }
    let results: Vec<ClassificationResult> = runs.iter().map(|r| r.result.clone()).collect();
    print_summary(&results, &palette);
}

pub fn print_rules(rules: &[RuleInfo], color: bool) {
    let palette = ansi::Palette::new(color);
    let mut current = None;
    for rule in rules {
        if current != Some(rule.stage) {
            current = Some(rule.stage);
            println!("\n{}", palette.paint(format!("━━━ {} ━━━", stage_title(rule.stage)), ansi::GRAY));
        }
        println!("  {} {}", palette.paint(format!("{:>3}", rule.order), ansi::YELLOW), palette.paint(rule.name, ansi::CYAN));
    }
    println!();
}

fn print_result_line(idx: usize, result: &ClassificationResult, palette: &ansi::Palette) {
    let verdict = if result.is_accepted() {
        palette.bold(palette.paint("ACCEPT", ansi::GREEN))
    } else {
        palette.bold(palette.paint("REJECT", ansi::RED))
    };
    let codes = result.reason_codes.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ");

    println!(
        "  {} {} {} {} {} {}",
        palette.paint(format!("[{}]", idx), ansi::GRAY),
        verdict,
        palette.bold(&result.name),
        palette.dim("│"),
        palette.paint(format!("score {:.2}  conf {:.2}", result.score, result.confidence), ansi::YELLOW),
        palette.paint(codes, ansi::BLUE),
    );
}

fn print_run(idx: usize, run: &ClassificationVerbose, palette: &ansi::Palette) {
    let details = &run.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Classifying: \"{}\"", run.result.name), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Normalized ━━━", ansi::GRAY));
    match &details.record {
        Some(record) => {
            println!("  {} {}", palette.dim("diacritic:"), record.diacritic_form());
            println!("  {} {}", palette.dim("ascii:    "), record.ascii_form());
            println!("  {} {}", palette.dim("tokens:   "), palette.paint(record.tokens().join(" · "), ansi::BLUE));
        }
        None => println!("  {}", palette.dim("empty after trimming")),
    }
    let traits = details.traits.iter_names().map(|(name, _)| name.to_ascii_lowercase()).collect::<Vec<_>>();
    if !traits.is_empty() {
        println!("  {} {}", palette.dim("traits:   "), palette.paint(traits.join(", "), ansi::YELLOW));
    }
    if let Some(hint) = &details.spelling_hint {
        println!("  {} {}", palette.dim("turkish spelling:"), palette.paint(hint, ansi::GREEN));
    }

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    if details.rules.is_empty() {
        println!("  {}", palette.dim("No rules evaluated"));
    }
    for rule in &details.rules {
        let mark = if rule.fired { palette.paint("✓", ansi::GREEN) } else { palette.dim("✗") };
        let stage = palette.dim(format!("{:<11}", rule.stage.as_str()));
        let name = if rule.fired { palette.paint(&rule.rule, ansi::CYAN) } else { palette.dim(&rule.rule) };
        println!("  {} {} {}", mark, stage, name);
    }

    println!("\n{}", palette.paint("━━━ Verdict ━━━", ansi::GRAY));
    print_result_line(idx, &run.result, palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let t = &details.timings;
    println!(
        "  Total: {}  │  Normalize: {}  │  Hard reject: {}  │  Signals: {}  │  Score: {}",
        palette.paint(format!("{:?}", t.total), ansi::GREEN),
        palette.dim(format!("{:?}", t.normalize)),
        palette.paint(format!("{:?}", t.hard_reject), ansi::CYAN),
        palette.paint(format!("{:?}", t.signals), ansi::CYAN),
        palette.dim(format!("{:?}", t.score)),
    );
    println!("  {}", palette.dim(format!("lexicon {}", details.lexicon_version)));
}

fn print_summary(results: &[ClassificationResult], palette: &ansi::Palette) {
    let accepted = results.iter().filter(|r| r.is_accepted()).count();
    println!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    println!(
        "  accepted {} / total {}",
        palette.bold(palette.paint(accepted.to_string(), ansi::GREEN)),
        palette.bold(results.len().to_string())
    );
    println!();
}

fn stage_title(stage: Stage) -> &'static str {
    match stage {
        Stage::HardReject => "Hard reject",
        Stage::Signal => "Signals",
    }
}
