use entitykit_settings::ReportSettings;

use crate::assembler::{GroupReport, ShapeRecord};
use crate::number::{format_fixed, js_number};

/// Builds the placement/styling config: one `const` block per group
/// followed by its default export.
#[derive(Debug)]
pub struct ConfigBuilder<'a> {
    settings: &'a ReportSettings,
    out: String,
}

impl<'a> ConfigBuilder<'a> {
    pub fn new(settings: &'a ReportSettings) -> Self {
        Self {
            settings,
            out: String::new(),
        }
    }

    pub fn push_group(&mut self, group: &GroupReport) {
        self.out.push_str(&format!("const {} = {{\n", group.name));
        let last = group.shapes.len().saturating_sub(1);
        for (index, shape) in group.shapes.iter().enumerate() {
            self.push_shape(shape);
            self.out
                .push_str(if index == last { "    }\n" } else { "    },\n" });
        }
        self.out.push_str("};\n");
        self.out
            .push_str(&format!("export default {};\n", group.name));
    }

    fn push_shape(&mut self, shape: &ShapeRecord) {
        let s = self.settings;
        let position = shape.placement.position;
        let rotation = shape.placement.rotation_radians;

        self.out.push_str(&format!("    {}: {{\n", shape.name));
        self.out
            .push_str(&format!("        scaleFactor: {},\n", js_number(s.scale_factor)));
        self.out.push_str(&format!(
            "        origin: {{ x: {}, y: {} }},\n",
            format_fixed(position.x, s.origin_digits),
            format_fixed(position.y, s.origin_digits)
        ));
        // Unrotated shapes omit the line entirely.
        if rotation != 0.0 {
            self.out.push_str(&format!(
                "        rotation: {},\n",
                format_fixed(rotation, s.rotation_digits)
            ));
        }
        self.out.push_str("        offset: { x: 0, y: 0 },\n");
        if shape.placement.flipped_horizontally {
            self.out.push_str("        scaleY: -1,\n");
        }
        self.out
            .push_str(&format!("        fillStyle: '{}'\n", shape.fill));
    }

    pub fn finish(self) -> String {
        self.out
    }
}
