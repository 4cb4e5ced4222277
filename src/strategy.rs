use std::fmt::Display;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::json::Document;
use crate::record::{self, Record};
use crate::Error;

/// One of the interchangeable ways of turning the document into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Parses into a [`Document`] and reads each element through the dynamic
    /// wrapper with [`record::from_json`].
    DynamicWrapper,
    /// Deserializes the document with serde into a list of key-value maps and
    /// builds each record with [`record::from_object`].
    GenericObject,
    /// Parses into a [`Document`] and converts each element to an owned
    /// key-value map before building it with [`record::from_json_dictionary`].
    WrapperDictionary,
}

impl Strategy {
    /// Every strategy, in the order they are benchmarked.
    pub const ALL: [Self; 3] = [
        Self::DynamicWrapper,
        Self::GenericObject,
        Self::WrapperDictionary,
    ];

    /// Returns the name used for this strategy in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DynamicWrapper => "dynamic-wrapper",
            Self::GenericObject => "generic-object",
            Self::WrapperDictionary => "wrapper-dictionary",
        }
    }

    /// Checks that `json` can be decoded by this strategy, returning a
    /// [`Prepared`] decoder that can then decode it any number of times.
    ///
    /// This is the only place a decode error is reported. Malformed JSON and
    /// documents whose root is not an array are rejected here.
    pub fn prepare(self, json: &[u8]) -> Result<Prepared<'_>, Error> {
        let input = match self {
            Self::DynamicWrapper | Self::WrapperDictionary => {
                let doc = Document::from_json_bytes(json)?;
                if doc.root().array().is_none() {
                    return Err(Error::unexpected_shape("expected an array at the root"));
                }

                if self == Self::DynamicWrapper {
                    Input::DynamicWrapper(json)
                } else {
                    Input::WrapperDictionary(json)
                }
            }
            Self::GenericObject => Input::GenericObject(serde_json::from_slice(json)?),
        };

        Ok(Prepared { input })
    }

    /// Decodes every record in `json` once.
    pub fn decode(self, json: &[u8]) -> Result<Vec<Record>, Error> {
        self.prepare(json).map(|prepared| prepared.decode())
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

/// A strategy name that doesn't match any [`Strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl Display for UnknownStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown strategy `{}`, expected one of: ", self.0)?;
        for (index, strategy) in Strategy::ALL.into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(strategy.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownStrategy {}

/// A strategy bound to a document that passed [`Strategy::prepare`].
#[derive(Debug, Clone)]
pub struct Prepared<'a> {
    input: Input<'a>,
}

#[derive(Debug, Clone)]
enum Input<'a> {
    // The wrapper strategies re-parse the source on every decode.
    DynamicWrapper(&'a [u8]),
    WrapperDictionary(&'a [u8]),
    // The serde strategy decodes once and only builds records afterwards.
    GenericObject(Vec<Map<String, Value>>),
}

impl Prepared<'_> {
    /// Returns the strategy this decoder uses.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        match self.input {
            Input::DynamicWrapper(_) => Strategy::DynamicWrapper,
            Input::WrapperDictionary(_) => Strategy::WrapperDictionary,
            Input::GenericObject(_) => Strategy::GenericObject,
        }
    }

    /// Decodes the whole document once, passing each record to `on_record`.
    pub fn for_each_record<F>(&self, mut on_record: F)
    where
        F: FnMut(Record),
    {
        match &self.input {
            Input::DynamicWrapper(json) => {
                let doc = Document::from_json_bytes_lossy(json);
                for element in doc.root().array_value() {
                    on_record(record::from_json(element));
                }
            }
            Input::WrapperDictionary(json) => {
                let doc = Document::from_json_bytes_lossy(json);
                for element in doc.root().array_value() {
                    on_record(record::from_json_dictionary(element));
                }
            }
            Input::GenericObject(objects) => {
                for object in objects {
                    on_record(record::from_object(object));
                }
            }
        }
    }

    /// Decodes the whole document once, collecting the records.
    #[must_use]
    pub fn decode(&self) -> Vec<Record> {
        let mut records = Vec::new();
        self.for_each_record(|record| records.push(record));
        records
    }
}
