//! Motion generators described by Harmonogram sources

use super::geometry::{Color, Direction, Frequency, Position};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// Index of an entity in a parse run's entity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub usize);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Oscillation,
    Rotation,
    #[default]
    Invalid,
}

impl EntityType {
    /// `oscillation` or `rotation`, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "oscillation" => Some(EntityType::Oscillation),
            "rotation" => Some(EntityType::Rotation),
            _ => None,
        }
    }

    /// Fraction of a period drawn at once
    pub fn cycles(self) -> f64 {
        match self {
            EntityType::Oscillation => 0.125,
            EntityType::Rotation => 0.75,
            EntityType::Invalid => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Oscillation => "oscillation",
            EntityType::Rotation => "rotation",
            EntityType::Invalid => "invalid",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule broken by a simple entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    InvalidType,
    NonPositiveFrequency,
    NonPositiveAmplitude,
    ZeroDirection,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationIssue::InvalidType => "missing or invalid type",
            ValidationIssue::NonPositiveFrequency => "frequency must be positive",
            ValidationIssue::NonPositiveAmplitude => "amplitude must be positive",
            ValidationIssue::ZeroDirection => "oscillation direction must be non-zero",
        })
    }
}

/// A single oscillating or rotating generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleEntity {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub amplitude: f64,
    pub frequency: Frequency,
    pub direction: Direction,
    pub center: Position,
    pub color: Color,
    pub preferred_buffer_size: usize,
}

impl Default for SimpleEntity {
    fn default() -> Self {
        Self {
            name: String::new(),
            entity_type: EntityType::Invalid,
            amplitude: 1.0,
            frequency: Frequency::INVALID,
            direction: Position::new(1.0, 0.0),
            center: Position::default(),
            color: Color::default(),
            preferred_buffer_size: 0,
        }
    }
}

impl SimpleEntity {
    pub fn cycles(&self) -> f64 {
        self.entity_type.cycles()
    }

    pub fn period(&self) -> f64 {
        self.frequency.period()
    }

    pub fn wavelength(&self) -> f64 {
        2.0 * PI * self.amplitude
    }

    /// Every rule the entity breaks; empty when valid
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.entity_type == EntityType::Invalid {
            issues.push(ValidationIssue::InvalidType);
        }
        if self.frequency.value.is_nan() || self.frequency.value <= 0.0 {
            issues.push(ValidationIssue::NonPositiveFrequency);
        }
        if self.amplitude.is_nan() || self.amplitude <= 0.0 {
            issues.push(ValidationIssue::NonPositiveAmplitude);
        }
        if self.entity_type == EntityType::Oscillation && self.direction.norm() == 0.0 {
            issues.push(ValidationIssue::ZeroDirection);
        }
        issues
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Samples needed to draw `cycles()` of a period at `time_delta` per step
    pub fn buffer_hint(&self, time_delta: f64) -> usize {
        (self.cycles() * self.period() / time_delta).round() as usize
    }

    pub fn set_preferred_buffer_size(&mut self, time_delta: f64) {
        self.preferred_buffer_size = self.buffer_hint(time_delta);
    }
}

impl fmt::Display for SimpleEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name: {}, type: {}, amplitude: {}, center: {}, color: {}, direction: {}, frequency: {}}}",
            self.name,
            self.entity_type,
            self.amplitude,
            self.center,
            self.color,
            self.direction,
            self.frequency
        )
    }
}

/// A group of simple entities moving as the sum of their motions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositeEntity {
    pub name: String,
    pub members: Vec<EntityId>,
    pub cycles: f64,
    pub center: Position,
    pub color: Color,
    pub preferred_buffer_size: usize,
}

impl CompositeEntity {
    pub fn add_member(&mut self, id: EntityId) {
        self.members.push(id);
    }

    /// Largest member hint, scaled by `cycles` when it is set. A negative
    /// scale clamps the hint to 0.
    pub fn buffer_hint(&self, member_hints: impl IntoIterator<Item = usize>) -> usize {
        let max = member_hints.into_iter().max().unwrap_or(0);
        if self.cycles == 0.0 {
            max
        } else {
            (self.cycles * max as f64).max(0.0).trunc() as usize
        }
    }

    pub fn set_preferred_buffer_size(&mut self, member_hints: impl IntoIterator<Item = usize>) {
        self.preferred_buffer_size = self.buffer_hint(member_hints);
    }
}

impl fmt::Display for CompositeEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{{{}: [{}], cycles: {}, center: {}, color: {}}}",
            self.name,
            members.join(", "),
            self.cycles,
            self.center,
            self.color
        )
    }
}

/// Either kind of entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Simple(SimpleEntity),
    Composite(CompositeEntity),
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::Simple(e) => &e.name,
            Entity::Composite(e) => &e.name,
        }
    }

    pub fn center(&self) -> Position {
        match self {
            Entity::Simple(e) => e.center,
            Entity::Composite(e) => e.center,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Entity::Simple(e) => e.color,
            Entity::Composite(e) => e.color,
        }
    }

    /// History length the renderer should keep for this entity
    pub fn preferred_buffer_size(&self) -> usize {
        match self {
            Entity::Simple(e) => e.preferred_buffer_size,
            Entity::Composite(e) => e.preferred_buffer_size,
        }
    }

    /// Composites are always valid
    pub fn is_valid(&self) -> bool {
        match self {
            Entity::Simple(e) => e.is_valid(),
            Entity::Composite(_) => true,
        }
    }

    /// Move the center, returning the displacement
    pub fn translate_center(&mut self, x: f64, y: f64) -> Position {
        let center = match self {
            Entity::Simple(e) => &mut e.center,
            Entity::Composite(e) => &mut e.center,
        };
        let old = *center;
        *center = Position::new(x, y);
        *center - old
    }

    pub fn as_simple(&self) -> Option<&SimpleEntity> {
        match self {
            Entity::Simple(e) => Some(e),
            Entity::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeEntity> {
        match self {
            Entity::Composite(e) => Some(e),
            Entity::Simple(_) => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Simple(e) => e.fmt(f),
            Entity::Composite(e) => e.fmt(f),
        }
    }
}

impl From<SimpleEntity> for Entity {
    fn from(e: SimpleEntity) -> Self {
        Entity::Simple(e)
    }
}

impl From<CompositeEntity> for Entity {
    fn from(e: CompositeEntity) -> Self {
        Entity::Composite(e)
    }
}
