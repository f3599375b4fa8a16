//! Sanitization of participant metadata JSON.
//!
//! Validation walks every value of the document:
//! - strings must be at most `max_string_length` characters long
//! - strings that parse as `YYYY-MM-DD` dates must fall inside the allowed date range
//! - the birth date field is exempt from the range check, instead the participant
//!   must be at least `minimum_age` years old
//!
//! After validation, every object key starting with the sensitive prefix is removed,
//! at any depth.

use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::config::PipelineConfig;
use crate::consts::{DATE_FORMAT, DAYS_PER_YEAR};
use crate::error::MetadataError;

#[derive(Debug, Clone)]
pub struct MetadataSanitizer {
    max_string_length: usize,
    date_range: (NaiveDate, NaiveDate),
    minimum_age: i64,
    sensitive_prefix: String,
    birth_date_field: String,
    today: NaiveDate,
}

impl From<&PipelineConfig> for MetadataSanitizer {
    fn from(config: &PipelineConfig) -> Self {
        MetadataSanitizer {
            max_string_length: config.max_string_length,
            date_range: (config.date_range_start, config.date_range_end),
            minimum_age: config.minimum_age,
            sensitive_prefix: config.sensitive_prefix.clone(),
            birth_date_field: config.birth_date_field.clone(),
            today: Utc::now().date_naive(),
        }
    }
}

impl Default for MetadataSanitizer {
    fn default() -> Self {
        MetadataSanitizer::from(&PipelineConfig::default())
    }
}

impl MetadataSanitizer {
    ///
    /// Pin the date ages are computed against.
    ///
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    ///
    /// Validate `data` and strip its sensitive fields.
    ///
    pub fn sanitize(&self, mut data: Value) -> Result<Value, MetadataError> {
        self.validate(&data)?;
        self.redact(&mut data);
        Ok(data)
    }

    ///
    /// Check string lengths, date ranges and the participant's age.
    ///
    pub fn validate(&self, data: &Value) -> Result<(), MetadataError> {
        let mut stack: Vec<&Value> = vec![data];

        while let Some(current) = stack.pop() {
            match current {
                Value::Object(map) => {
                    for (key, value) in map {
                        if *key == self.birth_date_field {
                            self.validate_age(value)?;
                        } else {
                            stack.push(value);
                        }
                    }
                }
                Value::Array(items) => stack.extend(items),
                Value::String(s) => {
                    self.validate_length(s)?;
                    if let Some(date) = parse_date(s) {
                        self.validate_date_in_range(s, date)?;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    ///
    /// Remove every object key that starts with the sensitive prefix.
    ///
    pub fn redact(&self, data: &mut Value) {
        let mut stack: Vec<&mut Value> = vec![data];

        while let Some(current) = stack.pop() {
            match current {
                Value::Object(map) => {
                    map.retain(|key, _| !key.starts_with(self.sensitive_prefix.as_str()));
                    stack.extend(map.values_mut());
                }
                Value::Array(items) => stack.extend(items.iter_mut()),
                _ => {}
            }
        }
    }

    fn validate_length(&self, value: &str) -> Result<(), MetadataError> {
        if value.chars().count() > self.max_string_length {
            return Err(MetadataError::StringTooLong {
                value: value.to_string(),
                max: self.max_string_length,
            });
        }
        Ok(())
    }

    fn validate_date_in_range(&self, value: &str, date: NaiveDate) -> Result<(), MetadataError> {
        let (start, end) = self.date_range;
        if date < start || date > end {
            return Err(MetadataError::DateOutOfRange(value.to_string()));
        }
        Ok(())
    }

    fn validate_age(&self, birth_date: &Value) -> Result<(), MetadataError> {
        let birth_date = birth_date
            .as_str()
            .and_then(parse_date)
            .ok_or(MetadataError::InvalidBirthDate)?;

        let age = (self.today - birth_date)
            .num_days()
            .div_euclid(DAYS_PER_YEAR);
        if age < self.minimum_age {
            return Err(MetadataError::ParticipantTooYoung {
                minimum: self.minimum_age,
                age,
            });
        }
        Ok(())
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
