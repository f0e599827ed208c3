//! Starter layouts.
//!
//! The catalog is fixed at compile time. Applying a template replaces a
//! floor's zones, walls, flows and labels; pins and equipment placements are
//! carried over untouched. Whether to ask the user first is up to the caller,
//! see [`Floor::has_layout_content`].

use crate::model::{Floor, Point, Zone};

/// Zone outline within a template, in document units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateZone {
    pub name: &'static str,
    pub color: &'static str,
    pub points: &'static [(f64, f64)],
}

/// A named starter layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub zones: &'static [TemplateZone],
}

const RECEIVING: &str = "#bde0fe";
const PRODUCTION: &str = "#ffc8dd";
const ASSEMBLY: &str = "#cdb4db";
const SHIPPING: &str = "#caffbf";
const STORAGE: &str = "#fdffb6";

static CATALOG: &[LayoutTemplate] = &[
    LayoutTemplate {
        id: "linear-flow",
        name: "Linear flow",
        description: "Four departments in a straight line from receiving to shipping",
        zones: &[
            TemplateZone {
                name: "Receiving",
                color: RECEIVING,
                points: &[(50.0, 150.0), (250.0, 150.0), (250.0, 450.0), (50.0, 450.0)],
            },
            TemplateZone {
                name: "Machining",
                color: PRODUCTION,
                points: &[(280.0, 150.0), (480.0, 150.0), (480.0, 450.0), (280.0, 450.0)],
            },
            TemplateZone {
                name: "Assembly",
                color: ASSEMBLY,
                points: &[(510.0, 150.0), (710.0, 150.0), (710.0, 450.0), (510.0, 450.0)],
            },
            TemplateZone {
                name: "Shipping",
                color: SHIPPING,
                points: &[(740.0, 150.0), (940.0, 150.0), (940.0, 450.0), (740.0, 450.0)],
            },
        ],
    },
    LayoutTemplate {
        id: "u-shape",
        name: "U-shape",
        description: "Receiving and shipping share one wall; production wraps around",
        zones: &[
            TemplateZone {
                name: "Receiving",
                color: RECEIVING,
                points: &[(50.0, 250.0), (300.0, 250.0), (300.0, 550.0), (50.0, 550.0)],
            },
            TemplateZone {
                name: "Production",
                color: PRODUCTION,
                points: &[(50.0, 50.0), (950.0, 50.0), (950.0, 230.0), (50.0, 230.0)],
            },
            TemplateZone {
                name: "Shipping",
                color: SHIPPING,
                points: &[(700.0, 250.0), (950.0, 250.0), (950.0, 550.0), (700.0, 550.0)],
            },
        ],
    },
    LayoutTemplate {
        id: "l-shape",
        name: "L-shape",
        description: "Production line turning a corner into storage",
        zones: &[
            TemplateZone {
                name: "Production",
                color: PRODUCTION,
                points: &[(50.0, 50.0), (700.0, 50.0), (700.0, 250.0), (50.0, 250.0)],
            },
            TemplateZone {
                name: "Storage",
                color: STORAGE,
                points: &[(720.0, 50.0), (950.0, 50.0), (950.0, 550.0), (720.0, 550.0)],
            },
        ],
    },
    LayoutTemplate {
        id: "cellular",
        name: "Cellular",
        description: "Self-contained work cells around a central aisle",
        zones: &[
            TemplateZone {
                name: "Cell A",
                color: PRODUCTION,
                points: &[(50.0, 350.0), (400.0, 350.0), (400.0, 550.0), (50.0, 550.0)],
            },
            TemplateZone {
                name: "Cell B",
                color: ASSEMBLY,
                points: &[(600.0, 350.0), (950.0, 350.0), (950.0, 550.0), (600.0, 550.0)],
            },
            TemplateZone {
                name: "Cell C",
                color: PRODUCTION,
                points: &[(50.0, 50.0), (400.0, 50.0), (400.0, 250.0), (50.0, 250.0)],
            },
            TemplateZone {
                name: "Cell D",
                color: ASSEMBLY,
                points: &[(600.0, 50.0), (950.0, 50.0), (950.0, 250.0), (600.0, 250.0)],
            },
            TemplateZone {
                name: "Aisle",
                color: STORAGE,
                points: &[(420.0, 50.0), (580.0, 50.0), (580.0, 550.0), (420.0, 550.0)],
            },
        ],
    },
    LayoutTemplate {
        id: "open-warehouse",
        name: "Open warehouse",
        description: "Bulk storage floor with staging in front of the docks",
        zones: &[
            TemplateZone {
                name: "Storage",
                color: STORAGE,
                points: &[(50.0, 200.0), (950.0, 200.0), (950.0, 550.0), (50.0, 550.0)],
            },
            TemplateZone {
                name: "Staging",
                color: RECEIVING,
                points: &[(50.0, 100.0), (950.0, 100.0), (950.0, 180.0), (50.0, 180.0)],
            },
            TemplateZone {
                name: "Docks",
                color: SHIPPING,
                points: &[(50.0, 30.0), (950.0, 30.0), (950.0, 80.0), (50.0, 80.0)],
            },
        ],
    },
];

/// All starter layouts in display order.
pub fn templates() -> &'static [LayoutTemplate] {
    CATALOG
}

pub fn find_template(id: &str) -> Option<&'static LayoutTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}

fn to_points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

/// Returns `floor` with its layout replaced by `template`.
pub fn apply_template(floor: &Floor, template: &LayoutTemplate) -> Floor {
    let mut next = floor.clone();
    next.zones.clear();
    next.walls.clear();
    next.flows.clear();
    next.labels.clear();

    for zone in template.zones {
        let id = next.allocate_id();
        next.zones.push(Zone {
            id,
            name: zone.name.to_string(),
            points: to_points(zone.points),
            color: zone.color.to_string(),
        });
    }

    tracing::debug!(
        floor = %floor.name,
        template = template.id,
        zones = next.zones.len(),
        "Applied layout template"
    );
    next
}
