use crate::domain::models::CheckEntry;

// Labels carry their own trailing space padding so every actual value lines
// up at display column 38. The utility output supplies the line break.
#[rustfmt::skip]
const BUILTIN: &[(&str, &str, &[&str])] = &[
    ("throttled",     "should be: throttled=0x0...           ", &["get_throttled"]),
    ("clock_arm",     "should be frequency(48)=1500398464... ", &["measure_clock", "arm"]),
    ("clock_core",    "should be frequency(1)=500000992...   ", &["measure_clock", "core"]),
    ("clock_v3d",     "should be frequency(46)=500000992...  ", &["measure_clock", "v3d"]),
    ("volts_core",    "should be volt=0.8700V...             ", &["measure_volts", "core"]),
    ("volts_sdram_c", "should be volt=1.100V...              ", &["measure_volts", "sdram_c"]),
    ("volts_sdram_i", "should be volt=1.100V...              ", &["measure_volts", "sdram_i"]),
    ("volts_sdram_p", "should be volt=1.100V...              ", &["measure_volts", "sdram_p"]),
    ("temp",          "should be strictly <80.0'C...         ", &["measure_temp"]),
];

/// The built-in catalog, in execution order: throttling, then the three
/// clocks, then the four voltage rails, then core temperature.
pub fn builtin_checks() -> Vec<CheckEntry> {
    BUILTIN
        .iter()
        .map(|(name, label, args)| CheckEntry {
            name: (*name).to_string(),
            label: (*label).to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        })
        .collect()
}
