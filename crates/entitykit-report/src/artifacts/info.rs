use crate::assembler::GroupReport;
use crate::classifier::ShapeTally;

const HIGHLIGHT_OPEN: &str = "<span style='color: red;'>";
const HIGHLIGHT_CLOSE: &str = "</span>";

/// Builds the HTML-ish summary shown in the plugin panel.
#[derive(Debug, Default)]
pub struct InfoBuilder {
    out: String,
}

impl InfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_group(&mut self, group: &GroupReport) {
        let tally: &ShapeTally = &group.tally;

        self.out.push_str(&format!("Entity: {} </br>", group.name));
        for (label, count) in [
            ("Rectangles", tally.rectangles),
            ("Ellipses", tally.ellipses),
            ("Polygons", tally.polygons),
            ("Stars", tally.stars),
            ("Lines", tally.lines),
        ] {
            if count > 0 {
                self.out.push_str(&format!(
                    "{}: {}{}{} </br>",
                    label, HIGHLIGHT_OPEN, count, HIGHLIGHT_CLOSE
                ));
            }
        }
        if tally.vectors > 0 {
            self.out
                .push_str(&format!("Vectors: {} </br>", tally.vectors));
        }

        // A group without a core is flagged.
        if tally.cores > 0 {
            self.out.push_str(&format!("Core: {} </br>", tally.cores));
        } else {
            self.out.push_str(&format!(
                "Core: {}0{} </br>",
                HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE
            ));
        }
        self.out.push_str(&format!("Total: {}</br>", tally.total()));
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}
