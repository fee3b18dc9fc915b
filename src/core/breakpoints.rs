/// Initial vertical offset and parallax strength for a viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakpointValues {
    pub translate_y: f64,
    pub movement_multiplier: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub max_width: f64,
    pub values: BreakpointValues,
}

const fn bp(max_width: f64, translate_y: f64, movement_multiplier: f64) -> Breakpoint {
    Breakpoint {
        max_width,
        values: BreakpointValues {
            translate_y,
            movement_multiplier,
        },
    }
}

/// Ascending by `max_width`; the first entry that fits wins.
pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    bp(1000.0, -135.0, 450.0),
    bp(1100.0, -130.0, 500.0),
    bp(1200.0, -125.0, 550.0),
    bp(1300.0, -120.0, 600.0),
];

/// Used above the widest entry of the table.
pub const DEFAULT_FALLBACK: BreakpointValues = BreakpointValues {
    translate_y: -110.0,
    movement_multiplier: 650.0,
};

#[derive(Clone, Copy, Debug)]
pub struct BreakpointTable {
    pub entries: &'static [Breakpoint],
    pub fallback: BreakpointValues,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_BREAKPOINTS,
            fallback: DEFAULT_FALLBACK,
        }
    }
}

impl BreakpointTable {
    pub fn resolve(&self, width: f64) -> BreakpointValues {
        self.entries
            .iter()
            .find(|bp| width <= bp.max_width)
            .map(|bp| bp.values)
            .unwrap_or(self.fallback)
    }
}

/// Resolve against the default table.
#[allow(dead_code)] // host tests; the page resolves through `PageConfig`
#[inline]
pub fn resolve_breakpoint(width: f64) -> BreakpointValues {
    BreakpointTable::default().resolve(width)
}
