use super::temperature::Temperature;
use std::fmt;

/// A single cell of a [`ThermoRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Missing,
}

impl FieldValue {
    /// Renders the value as a CSV cell. Absent values become empty cells, booleans use
    /// `True`/`False` and integral floats keep a trailing `.0`, matching datasets produced
    /// by earlier tooling.
    pub fn to_cell(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(x) if x.fract() == 0.0 => format!("{x:.1}"),
            FieldValue::Float(x) => x.to_string(),
            FieldValue::Boolean(true) => "True".to_string(),
            FieldValue::Boolean(false) => "False".to_string(),
            FieldValue::Missing => String::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(v: Option<String>) -> Self {
        v.map_or(FieldValue::Missing, FieldValue::Text)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(v: Option<i64>) -> Self {
        v.map_or(FieldValue::Missing, FieldValue::Integer)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(FieldValue::Missing, FieldValue::Float)
    }
}

impl From<Option<bool>> for FieldValue {
    fn from(v: Option<bool>) -> Self {
        v.map_or(FieldValue::Missing, FieldValue::Boolean)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "'{}'", s),
            FieldValue::Missing => write!(f, "None"),
            other => write!(f, "{}", other.to_cell()),
        }
    }
}

/// Thermochemistry results of one ORCA output file at one reference temperature.
///
/// The column order produced by [`keys`](Self::keys) and [`fields`](Self::fields) is fixed:
/// `description, method, basis_set, is_ion, charge, multiplicity, is_minimum, elec_en,
/// zero_point_en, U<T>K, H<T>K, S<T>K, G<T>K, version`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoRecord {
    pub temperature: Temperature,
    pub description: Option<String>,
    pub method: Option<String>,
    pub basis_set: Option<String>,
    pub charge: Option<i64>,
    pub multiplicity: Option<i64>,
    pub is_minimum: Option<bool>,
    pub elec_en: Option<f64>,
    pub zero_point_en: Option<f64>,
    pub inner_energy: Option<f64>,
    pub enthalpy: Option<f64>,
    pub entropy: Option<f64>,
    pub gibbs_free_enthalpy: Option<f64>,
    pub version: Option<String>,
}

impl ThermoRecord {
    pub fn new(temperature: Temperature) -> Self {
        Self {
            temperature,
            description: None,
            method: None,
            basis_set: None,
            charge: None,
            multiplicity: None,
            is_minimum: None,
            elec_en: None,
            zero_point_en: None,
            inner_energy: None,
            enthalpy: None,
            entropy: None,
            gibbs_free_enthalpy: None,
            version: None,
        }
    }

    /// A charged species is an ion; an absent charge counts as neutral.
    pub fn is_ion(&self) -> bool {
        self.charge.is_some_and(|c| c != 0)
    }

    pub fn keys(&self) -> Vec<String> {
        let t = self.temperature.label();
        vec![
            "description".to_string(),
            "method".to_string(),
            "basis_set".to_string(),
            "is_ion".to_string(),
            "charge".to_string(),
            "multiplicity".to_string(),
            "is_minimum".to_string(),
            "elec_en".to_string(),
            "zero_point_en".to_string(),
            format!("U{t}K"),
            format!("H{t}K"),
            format!("S{t}K"),
            format!("G{t}K"),
            "version".to_string(),
        ]
    }

    pub fn values(&self) -> Vec<FieldValue> {
        vec![
            self.description.clone().into(),
            self.method.clone().into(),
            self.basis_set.clone().into(),
            FieldValue::Boolean(self.is_ion()),
            self.charge.into(),
            self.multiplicity.into(),
            self.is_minimum.into(),
            self.elec_en.into(),
            self.zero_point_en.into(),
            self.inner_energy.into(),
            self.enthalpy.into(),
            self.entropy.into(),
            self.gibbs_free_enthalpy.into(),
            self.version.clone().into(),
        ]
    }

    /// The record as an ordered list of `(column, value)` pairs.
    pub fn fields(&self) -> Vec<(String, FieldValue)> {
        self.keys().into_iter().zip(self.values()).collect()
    }

    pub fn get(&self, key: &str) -> Option<FieldValue> {
        self.fields()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn to_row(&self) -> Vec<String> {
        self.values().iter().map(FieldValue::to_cell).collect()
    }
}

impl fmt::Display for ThermoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        let last = fields.len().saturating_sub(1);
        for (i, (key, value)) in fields.iter().enumerate() {
            let open = if i == 0 { "{" } else { " " };
            let close = if i == last { "}" } else { "," };
            writeln!(f, "{open}'{key}': {value}{close}")?;
        }
        Ok(())
    }
}
