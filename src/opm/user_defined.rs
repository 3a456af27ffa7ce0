use crate::constants::USER_DEFINED_PREFIX;
use crate::keyword::validators::validate_number;
use crate::keyword::Value;
use crate::odm_errors::OdmError;

/// User-defined parameters, written last as `USER_DEFINED_<KEY> = <value>`.
///
/// Keys are given without the `USER_DEFINED_` prefix. Entries keep their
/// insertion order; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDefined {
    entries: Vec<(String, Value)>,
}

impl UserDefined {
    pub fn new() -> Self {
        UserDefined::default()
    }

    /// Insert or replace a parameter, returning the previous value.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.entries.push((key.to_string(), value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys must be non-empty and free of whitespace and `=`; numbers must be
    /// finite.
    ///
    /// Return
    /// ----------
    /// * [`OdmError::InvalidValue`] naming the full `USER_DEFINED_<KEY>` keyword.
    pub fn validate(&self) -> Result<(), OdmError> {
        for (key, value) in &self.entries {
            let key_ok = !key.is_empty() && !key.chars().any(|c| c.is_whitespace() || c == '=');
            let value_ok = !value.is_number() || validate_number(value);
            if !key_ok || !value_ok {
                return Err(OdmError::InvalidValue(format!("{USER_DEFINED_PREFIX}{key}")));
            }
        }
        Ok(())
    }

    /// One `USER_DEFINED_<KEY> = <value>` line per entry.
    pub fn output(&self) -> impl Iterator<Item = String> + '_ {
        self.iter()
            .map(|(key, value)| format!("{USER_DEFINED_PREFIX}{key} = {value}"))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for UserDefined {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut user_defined = UserDefined::new();
        for (key, value) in iter {
            let key: String = key.into();
            user_defined.insert(&key, value);
        }
        user_defined
    }
}
