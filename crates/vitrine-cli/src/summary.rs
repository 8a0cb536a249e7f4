use console::Style;
use vitrine_core::image_set::ImageSet;
use vitrine_core::script::{ReplayReport, StepRecord};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    event: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            event: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn rule(s: &Styles, width: usize) {
    println!("  {}", s.title.apply_to("\u{2550}".repeat(width)));
}

pub fn print_replay_report(report: &ReplayReport, source: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Vitrine Replay"));
    rule(&s, 14);
    println!();
    println!("  {:<14}{}", s.label.apply_to("Script"), s.path.apply_to(source));
    println!("  {:<14}{}", s.label.apply_to("Mode"), s.value.apply_to(report.mode));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(report.image_count)
    );
    println!();

    println!("  {}", s.header.apply_to("Steps"));
    println!(
        "    {:>4}  {:<14}{:>6}  {:<24}{:<6}{:>5}  {}",
        "#", "Action", "Index", "Transform", "Open", "Lock", "Events"
    );
    println!("    {}", "-".repeat(76));
    for record in &report.records {
        print_record(&s, record);
    }
    println!();

    let depth_style = if report.final_lock_depth == 0 {
        &s.event
    } else {
        &s.disabled
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Final lock"),
        depth_style.apply_to(report.final_lock_depth)
    );
    println!();
}

fn print_record(s: &Styles, record: &StepRecord) {
    let mut state = record.transform.to_string();
    if record.dragging {
        state.push_str(" drag");
    }
    if let Some(lens) = record.lens.filter(|_| record.hovering) {
        state = format!("lens {:.0}% {:.0}%", lens.x, lens.y);
    }
    let events = record
        .events
        .iter()
        .map(|e| format!("{e:?}"))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "    {:>4}  {:<14}{:>6}  {:<24}{:<6}{:>5}  {}",
        record.step,
        record.action,
        record.index,
        state,
        if record.open { "yes" } else { "no" },
        record.lock_depth,
        s.event.apply_to(events)
    );
}

pub fn print_image_set(name: Option<&str>, images: &ImageSet) {
    let s = Styles::new();

    println!();
    println!(
        "  {}",
        s.title.apply_to(name.unwrap_or("Untitled product"))
    );
    rule(&s, 16);
    println!();

    if images.is_placeholder() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Images"),
            s.disabled.apply_to("none, showing placeholder")
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Images"),
            s.value.apply_to(images.len())
        );
    }
    println!();

    for (i, image) in images.iter().enumerate() {
        println!(
            "    {:>3}  {}  {}",
            i + 1,
            s.path.apply_to(&image.uri),
            s.label.apply_to(&image.alt)
        );
    }
    println!();
}
