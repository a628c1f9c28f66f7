use serde::{Deserialize, Serialize};

use crate::validation::{self, FieldRule};

/// Complete set of drawing and routing parameters used by the chip designer.
///
/// The serde names match the element names of the `<Settings>` documents
/// the plug-in has always written, so older settings files import as-is.
/// Elements missing from a document keep their compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Settings", rename_all = "PascalCase", default)]
pub struct ConfigurationProfile {
    /// CAD layers holding flow channels
    #[serde(with = "layer_names")]
    pub flow_layers: Vec<String>,

    /// CAD layers holding control channels
    #[serde(with = "layer_names")]
    pub control_layers: Vec<String>,

    /// Number of bars drawn across a punch
    pub punch_bar_number: i32,
    pub punch_bar_width: f64,
    pub punch_radius: f64,

    /// Valve size relative to the flow line width
    pub valve_relative_width: f64,
    pub valve_relative_height: f64,

    /// Minimum distance from a line to another line
    pub resolution: f64,
    pub connection_width: f64,
    pub flow_extra_width: f64,
    pub valve_extra_width: f64,
    pub control_line_extra_width: f64,

    /// Minimum distance from a punch center to another line
    pub punch2_line: f64,
}

impl Default for ConfigurationProfile {
    fn default() -> Self {
        Self {
            flow_layers: vec!["Flow".to_string()],
            control_layers: vec!["Control".to_string()],
            punch_bar_number: 8,
            punch_bar_width: 0.12,
            punch_radius: 0.4,
            valve_relative_width: 1.5,
            valve_relative_height: 1.0,
            resolution: 0.300,
            connection_width: 0.05,
            flow_extra_width: 0.08,
            valve_extra_width: 0.08,
            control_line_extra_width: 0.08,
            punch2_line: 1.0,
        }
    }
}

impl ConfigurationProfile {
    pub fn layers(&self, kind: LayerKind) -> &[String] {
        match kind {
            LayerKind::Flow => &self.flow_layers,
            LayerKind::Control => &self.control_layers,
        }
    }

    pub fn layers_mut(&mut self, kind: LayerKind) -> &mut Vec<String> {
        match kind {
            LayerKind::Flow => &mut self.flow_layers,
            LayerKind::Control => &mut self.control_layers,
        }
    }
}

/// The two layer sets of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Flow,
    Control,
}

impl LayerKind {
    pub const ALL: [LayerKind; 2] = [LayerKind::Flow, LayerKind::Control];

    pub fn label(&self) -> &'static str {
        match self {
            LayerKind::Flow => "Flow Layers",
            LayerKind::Control => "Control Layers",
        }
    }
}

/// The numeric fields of a profile, each edited as text in the settings dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericField {
    PunchBarNumber,
    PunchBarWidth,
    PunchRadius,
    ValveRelativeWidth,
    ValveRelativeHeight,
    Resolution,
    ConnectionWidth,
    FlowExtraWidth,
    ValveExtraWidth,
    ControlLineExtraWidth,
    Punch2Line,
}

impl NumericField {
    pub const ALL: [NumericField; 11] = [
        NumericField::PunchBarNumber,
        NumericField::PunchBarWidth,
        NumericField::PunchRadius,
        NumericField::ValveRelativeWidth,
        NumericField::ValveRelativeHeight,
        NumericField::Resolution,
        NumericField::ConnectionWidth,
        NumericField::FlowExtraWidth,
        NumericField::ValveExtraWidth,
        NumericField::ControlLineExtraWidth,
        NumericField::Punch2Line,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NumericField::PunchBarNumber => "Number of Bars",
            NumericField::PunchBarWidth => "Width of each Bar",
            NumericField::PunchRadius => "Punch Radius",
            NumericField::ValveRelativeWidth => "Valve Width to Flowline Width Ratio",
            NumericField::ValveRelativeHeight => "Valve Height to Flowline Width Ratio",
            NumericField::Resolution => "Minimum Distance between Lines",
            NumericField::ConnectionWidth => "Connection Line Width",
            NumericField::FlowExtraWidth => "Extra Space around a Flowline",
            NumericField::ValveExtraWidth => "Extra Space around a Valve",
            NumericField::ControlLineExtraWidth => "Extra Space around a Control Line",
            NumericField::Punch2Line => "Minimum Distance from Punch Center to Line",
        }
    }

    pub fn rule(&self) -> FieldRule {
        match self {
            NumericField::PunchBarNumber => FieldRule::PositiveInteger,
            NumericField::PunchRadius | NumericField::Resolution => FieldRule::PositiveNumber,
            _ => FieldRule::Number,
        }
    }

    /// Text shown in the editor for this field's current value
    pub fn read(&self, profile: &ConfigurationProfile) -> String {
        match self.real_slot(profile) {
            Some(value) => value.to_string(),
            None => profile.punch_bar_number.to_string(),
        }
    }

    /// Parse `text` and store it in `profile`. Returns false, leaving the
    /// profile untouched, when the text does not parse. Range constraints
    /// are not checked here.
    pub fn write(&self, profile: &mut ConfigurationProfile, text: &str) -> bool {
        if *self == NumericField::PunchBarNumber {
            return match validation::parse_integer(text) {
                Some(value) => {
                    profile.punch_bar_number = value;
                    true
                }
                None => false,
            };
        }

        match (validation::parse_number(text), self.real_slot_mut(profile)) {
            (Some(value), Some(slot)) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    fn real_slot(&self, profile: &ConfigurationProfile) -> Option<f64> {
        let value = match self {
            NumericField::PunchBarNumber => return None,
            NumericField::PunchBarWidth => profile.punch_bar_width,
            NumericField::PunchRadius => profile.punch_radius,
            NumericField::ValveRelativeWidth => profile.valve_relative_width,
            NumericField::ValveRelativeHeight => profile.valve_relative_height,
            NumericField::Resolution => profile.resolution,
            NumericField::ConnectionWidth => profile.connection_width,
            NumericField::FlowExtraWidth => profile.flow_extra_width,
            NumericField::ValveExtraWidth => profile.valve_extra_width,
            NumericField::ControlLineExtraWidth => profile.control_line_extra_width,
            NumericField::Punch2Line => profile.punch2_line,
        };
        Some(value)
    }

    fn real_slot_mut<'a>(&self, profile: &'a mut ConfigurationProfile) -> Option<&'a mut f64> {
        let slot = match self {
            NumericField::PunchBarNumber => return None,
            NumericField::PunchBarWidth => &mut profile.punch_bar_width,
            NumericField::PunchRadius => &mut profile.punch_radius,
            NumericField::ValveRelativeWidth => &mut profile.valve_relative_width,
            NumericField::ValveRelativeHeight => &mut profile.valve_relative_height,
            NumericField::Resolution => &mut profile.resolution,
            NumericField::ConnectionWidth => &mut profile.connection_width,
            NumericField::FlowExtraWidth => &mut profile.flow_extra_width,
            NumericField::ValveExtraWidth => &mut profile.valve_extra_width,
            NumericField::ControlLineExtraWidth => &mut profile.control_line_extra_width,
            NumericField::Punch2Line => &mut profile.punch2_line,
        };
        Some(slot)
    }
}

/// Layer sets are stored as a wrapper element with one `<string>` child per name
mod layer_names {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct LayerNamesRef<'a> {
        #[serde(rename = "string")]
        names: &'a [String],
    }

    #[derive(Deserialize)]
    struct LayerNames {
        #[serde(rename = "string", default)]
        names: Vec<String>,
    }

    pub fn serialize<S: Serializer>(names: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        LayerNamesRef { names }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        LayerNames::deserialize(deserializer).map(|layers| layers.names)
    }
}
