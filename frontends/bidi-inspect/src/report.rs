use rio_bidi::{BidiEngine, VisualRun};
use std::fmt::Write;

/// One line per run, either in visual or logical order, followed by the
/// concatenated visual line.
pub fn describe_line(engine: &mut BidiEngine, text: &str, logical: bool) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let visual = engine.process(&units);
    let mut out = String::new();

    if logical {
        for entity in engine.entities() {
            let _ = writeln!(out, "{}", format_run(&VisualRun::from_entity(entity, &units)));
        }
    } else {
        for run in &visual {
            let _ = writeln!(out, "{}", format_run(run));
        }
    }

    let line: String = visual.iter().map(VisualRun::to_string_lossy).collect();
    let _ = write!(
        out,
        "paragraph={} visual={:?}",
        engine.paragraph_level(),
        line
    );
    out
}

pub fn format_run(run: &VisualRun) -> String {
    format!(
        "level={} class={} range={}..{} {:?}",
        run.level,
        run.class,
        run.range.start,
        run.range.end,
        run.to_string_lossy()
    )
}
