use std::array::TryFromSliceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error types for DnsWire
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DnsWireError {
    /// Invalid value for CLASS type
    InvalidClass(u16),
    /// Invalid value for QCLASS type
    InvalidQClass(u16),
    /// Label doesn't follow RFC rules
    InvalidLabel,
    /// Domain name doesn't follow RFC rules
    InvalidName,
    /// Character String doesn't follow RFC rules
    InvalidCharacterString,
    /// Compression pointer points forward or the pointer chain is too long
    InvalidCompressionPointer,
    /// Record data content violates its type layout
    InvalidRecordData,
    /// Record data length is inconsistent with its type
    InvalidRecordLength,
    /// Provided data is not valid for a DNS message
    InvalidDnsMessage,
    /// Incomplete dns message, should try again after more data available
    InsufficientData,
    /// Failed to write the message to the provided buffer
    FailedToWrite,
}

impl From<TryFromSliceError> for DnsWireError {
    fn from(_: TryFromSliceError) -> Self {
        Self::InvalidDnsMessage
    }
}

impl From<std::io::Error> for DnsWireError {
    fn from(_value: std::io::Error) -> Self {
        Self::FailedToWrite
    }
}

impl Error for DnsWireError {}

impl Display for DnsWireError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DnsWireError::InvalidClass(class) => {
                write!(f, "Provided class is invalid: {0}", class)
            }
            DnsWireError::InvalidQClass(qclass) => {
                write!(f, "Provided Qclass is invalid: {0}", qclass)
            }
            DnsWireError::InvalidLabel => write!(f, "Provided label is not valid"),
            DnsWireError::InvalidName => write!(f, "Provided domain name is not valid"),
            DnsWireError::InvalidCharacterString => {
                write!(f, "Provided character string is not valid")
            }
            DnsWireError::InvalidCompressionPointer => {
                write!(f, "Message contains an invalid compression pointer")
            }
            DnsWireError::InvalidRecordData => {
                write!(f, "Record data content violates its type layout")
            }
            DnsWireError::InvalidRecordLength => {
                write!(f, "Record data length is inconsistent with its type")
            }
            DnsWireError::InvalidDnsMessage => {
                write!(f, "Provided information is not a valid DNS message")
            }
            DnsWireError::InsufficientData => write!(f, "Incomplete dns message"),
            DnsWireError::FailedToWrite => {
                write!(f, "Failed to write the message to provided buffer")
            }
        }
    }
}
