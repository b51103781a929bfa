use entitykit_settings::ReportSettings;

use crate::assembler::GroupReport;
use crate::number::format_fixed;

/// Builds the outline data: one JSON-like object per group mapping each
/// shape name to its outline points.
#[derive(Debug)]
pub struct DataBuilder<'a> {
    settings: &'a ReportSettings,
    out: String,
}

impl<'a> DataBuilder<'a> {
    pub fn new(settings: &'a ReportSettings) -> Self {
        Self {
            settings,
            out: String::new(),
        }
    }

    pub fn push_group(&mut self, group: &GroupReport) {
        let digits = self.settings.coordinate_digits;

        self.out.push_str("{\n");
        self.out.push_str(&format!("    \"{}\": {{\n", group.name));

        let last_shape = group.shapes.len().saturating_sub(1);
        for (shape_index, shape) in group.shapes.iter().enumerate() {
            self.out.push_str(&format!("        \"{}\": [\n", shape.name));

            let last_point = shape.outline.len().saturating_sub(1);
            for (point_index, point) in shape.outline.iter().enumerate() {
                self.out.push_str(&format!(
                    "            {{ \"x\": {}, \"y\": {} }}",
                    format_fixed(point.x, digits),
                    format_fixed(point.y, digits)
                ));
                self.out
                    .push_str(if point_index == last_point { "\n" } else { ",\n" });
            }

            self.out.push_str(if shape_index == last_shape {
                "        ]\n"
            } else {
                "        ],\n"
            });
        }

        self.out.push_str("    }\n");
        self.out.push_str("}\n");
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::ShapeRecord;
    use crate::classifier::ShapeTally;
    use entitykit_geometry::{Coordinate, GlobalPlacement};

    fn shape(name: &str, outline: Vec<Coordinate>) -> ShapeRecord {
        ShapeRecord {
            name: name.to_string(),
            placement: GlobalPlacement {
                position: Coordinate::new(0.0, 0.0),
                rotation_radians: 0.0,
                flipped_horizontally: false,
            },
            fill: "#2D2D2D".to_string(),
            outline,
        }
    }

    #[test]
    fn test_points_and_separators() {
        let settings = ReportSettings::default();
        let mut builder = DataBuilder::new(&settings);
        builder.push_group(&GroupReport {
            name: "ship".to_string(),
            shapes: vec![
                shape(
                    "hull",
                    vec![Coordinate::new(1.23456, 2.0), Coordinate::new(0.0, -1.5)],
                ),
                shape("body", Vec::new()),
            ],
            tally: ShapeTally::default(),
        });

        assert_eq!(
            builder.finish(),
            "{\n\
             \x20   \"ship\": {\n\
             \x20       \"hull\": [\n\
             \x20           { \"x\": 1.235, \"y\": 2 },\n\
             \x20           { \"x\": 0, \"y\": -1.5 }\n\
             \x20       ],\n\
             \x20       \"body\": [\n\
             \x20       ]\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_nan_coordinates_are_spelled_out() {
        let settings = ReportSettings::default();
        let mut builder = DataBuilder::new(&settings);
        builder.push_group(&GroupReport {
            name: "g".to_string(),
            shapes: vec![shape("s", vec![Coordinate::new(f64::NAN, 3.0)])],
            tally: ShapeTally::default(),
        });
        assert!(builder.finish().contains("{ \"x\": NaN, \"y\": 3 }\n"));
    }

    #[test]
    fn test_coordinate_digits_setting() {
        let settings = ReportSettings {
            coordinate_digits: 1,
            ..Default::default()
        };
        let mut builder = DataBuilder::new(&settings);
        builder.push_group(&GroupReport {
            name: "g".to_string(),
            shapes: vec![shape("s", vec![Coordinate::new(1.26, 0.04)])],
            tally: ShapeTally::default(),
        });
        assert!(builder.finish().contains("{ \"x\": 1.3, \"y\": 0 }"));
    }
}
