use clavier::dispatch::DispatchOutcome;
use clavier::model::{KeyboardCollection, KeyboardLayout};
use clavier::render::{Glyph, RenderedLayout};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|l| Cell::new(l).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect()
}

pub fn print_collection_summary(collection: &KeyboardCollection) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["Layout", "Rows", "Keys", "Fixed", "Switch Keys"]));

    for (i, layout) in collection.keyboards.iter().enumerate() {
        let keys = layout.rows.iter().flat_map(|r| r.keys.iter());
        let fixed = keys.clone().filter(|k| !k.is_flexible()).count();
        let switches = keys.filter(|k| k.action.is_layout_switch()).count();

        let name = if i == 0 {
            format!("#{} (default)", i)
        } else {
            format!("#{}", i)
        };

        table.add_row(vec![
            Cell::new(name),
            Cell::new(layout.rows.len()).set_alignment(CellAlignment::Right),
            Cell::new(layout.key_count()).set_alignment(CellAlignment::Right),
            Cell::new(fixed).set_alignment(CellAlignment::Right),
            Cell::new(switches).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

/// One line per row with the key labels, the way the keyboard reads.
pub fn print_layout_grid(index: usize, layout: &KeyboardLayout) {
    println!("\nLayout #{}", index);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in &layout.rows {
        let cells: Vec<Cell> = row
            .keys
            .iter()
            .map(|k| Cell::new(k.visual.label()).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
}

fn glyph_text(glyph: &Glyph) -> String {
    match glyph {
        Glyph::Text(s) => s.clone(),
        Glyph::Symbol(name) => format!("[{}]", name),
        Glyph::Vector { name, path: Some(_) } => format!("<{}>", name),
        Glyph::Vector { name, path: None } => format!("<{}?>", name),
    }
}

pub fn print_key_frames(index: usize, rendered: &RenderedLayout) {
    println!(
        "\nLayout #{} ({:.0} x {:.0})",
        index, rendered.width, rendered.height
    );
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(header(&["Row", "Col", "Glyph", "X", "Y", "Width", "Fixed", "Action"]));

    for key in rendered.rows.iter().flat_map(|r| r.keys.iter()) {
        table.add_row(vec![
            Cell::new(key.row),
            Cell::new(key.column),
            Cell::new(glyph_text(&key.glyph)),
            Cell::new(format!("{:.1}", key.x)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", key.y)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", key.width)).set_alignment(CellAlignment::Right),
            Cell::new(if key.fixed { "yes" } else { "" }),
            Cell::new(key.tap().tag()),
        ]);
    }
    println!("{table}");
}

pub fn describe_outcome(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::Edited => "edited".to_string(),
        DispatchOutcome::Switched {
            from,
            to,
            direction,
        } => format!("switched {} -> {} ({})", from, to, direction),
        DispatchOutcome::Ignored => "ignored".to_string(),
    }
}
