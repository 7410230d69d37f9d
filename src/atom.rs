use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A single cell of a tabular dataset.
///
/// Cells read from text become the narrowest kind they parse as: an integer,
/// then a float, then the trimmed text itself.
#[derive(Debug, Clone)]
pub enum Atom {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Atom {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Atom::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Atom::Float(f);
        }
        Atom::Text(trimmed.to_string())
    }

    /// Numeric view of the atom, `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Atom::Int(i) => Some(i as f64),
            Atom::Float(f) => Some(f),
            Atom::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Atom::Text(_))
    }

    /// Equality that also treats numbers of different kinds as equal when
    /// their values match, so `Int(1)` matches `Float(1.0)`.
    pub fn same_value(&self, other: &Atom) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    // -0.0 and 0.0 must hash alike since they compare equal.
    fn float_bits(f: f64) -> u64 {
        if f == 0.0 {
            0.0f64.to_bits()
        } else {
            f.to_bits()
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Int(a), Atom::Int(b)) => a == b,
            (Atom::Float(a), Atom::Float(b)) => Self::float_bits(*a) == Self::float_bits(*b),
            (Atom::Text(a), Atom::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Atom::Int(i) => i.hash(state),
            Atom::Float(f) => Self::float_bits(*f).hash(state),
            Atom::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int(i) => write!(f, "{}", i),
            Atom::Float(x) => write!(f, "{}", x),
            Atom::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Atom {
    fn from(i: i64) -> Self {
        Atom::Int(i)
    }
}

impl From<f64> for Atom {
    fn from(f: f64) -> Self {
        Atom::Float(f)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::Text(s.to_string())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_prefers_int_then_float_then_text() {
        assert_eq!(Atom::parse("42"), Atom::Int(42));
        assert_eq!(Atom::parse(" 4.5 "), Atom::Float(4.5));
        assert_eq!(Atom::parse("  sunny "), Atom::Text("sunny".into()));
    }

    #[test]
    fn int_and_float_are_distinct() {
        assert_ne!(Atom::Int(1), Atom::Float(1.0));
    }

    #[test]
    fn signed_zero_hashes_once() {
        let set: HashSet<Atom> = [Atom::Float(0.0), Atom::Float(-0.0)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn same_value_crosses_numeric_kinds() {
        assert!(Atom::Int(1).same_value(&Atom::Float(1.0)));
        assert!(Atom::from("a").same_value(&Atom::from("a")));
        assert!(!Atom::Int(1).same_value(&Atom::from("1")));
        assert!(!Atom::Float(1.5).same_value(&Atom::Int(1)));
    }

    #[test]
    fn numeric_view() {
        assert_eq!(Atom::Int(3).as_f64(), Some(3.0));
        assert_eq!(Atom::from("x").as_f64(), None);
        assert!(Atom::Float(2.0).is_numeric());
    }
}
