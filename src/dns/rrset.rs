use super::{Name, ResourceRecord, CLASS, TYPE};

/// A set of resource records sharing the same owner name, class and type,
/// see [rfc2181](https://datatracker.ietf.org/doc/html/rfc2181#section-5).
///
/// Owner names compare case insensitively, `Example.com` and `example.COM`
/// belong to the same set.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RRSet<'a> {
    name: Name<'a>,
    class: CLASS,
    rr_type: TYPE,
    records: Vec<ResourceRecord<'a>>,
}

impl<'a> RRSet<'a> {
    /// Creates a new set keyed by the given record
    pub fn new(record: ResourceRecord<'a>) -> Self {
        Self {
            name: record.name.clone(),
            class: record.class,
            rr_type: record.rdata.type_code(),
            records: vec![record],
        }
    }

    /// The owner name shared by every record in this set
    pub fn name(&self) -> &Name<'a> {
        &self.name
    }

    /// The class shared by every record in this set
    pub fn class(&self) -> CLASS {
        self.class
    }

    /// The record type shared by every record in this set
    pub fn rr_type(&self) -> TYPE {
        self.rr_type
    }

    /// The records of this set, in the order they were added
    pub fn records(&self) -> &[ResourceRecord<'a>] {
        &self.records
    }

    /// The lowest ttl among the records of this set
    pub fn ttl(&self) -> u32 {
        self.records
            .iter()
            .map(|record| record.ttl)
            .min()
            .unwrap_or(0)
    }

    /// Returns true if the record belongs in this set
    pub fn matches(&self, record: &ResourceRecord) -> bool {
        self.name == record.name
            && self.class == record.class
            && self.rr_type == record.rdata.type_code()
    }

    /// Adds a record to this set.
    /// Returns false and leaves the set untouched if the record belongs to another set.
    pub fn push(&mut self, record: ResourceRecord<'a>) -> bool {
        if !self.matches(&record) {
            return false;
        }

        self.records.push(record);
        true
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> RRSet<'b> {
        RRSet {
            name: self.name.into_owned(),
            class: self.class,
            rr_type: self.rr_type,
            records: self
                .records
                .into_iter()
                .map(|record| record.into_owned())
                .collect(),
        }
    }

    /// Merges a record into the set it belongs to, appending a new set when none matches
    pub(crate) fn merge_record(sets: &mut Vec<RRSet<'a>>, record: ResourceRecord<'a>) {
        match sets.iter_mut().find(|set| set.matches(&record)) {
            Some(set) => {
                set.records.push(record);
            }
            None => sets.push(RRSet::new(record)),
        }
    }

    /// Total number of records across all sets
    pub(crate) fn count_records(sets: &[RRSet]) -> usize {
        sets.iter().map(|set| set.records.len()).sum()
    }
}
