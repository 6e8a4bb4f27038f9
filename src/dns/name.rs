use std::{borrow::Cow, convert::TryFrom, fmt::Display, hash::Hash};

use crate::bytes_buffer::BytesBuffer;

use super::{WireFormat, MAX_LABEL_LENGTH, MAX_NAME_LENGTH, MAX_POINTER_HOPS};

const POINTER_MASK: u8 = 0b1100_0000;

/// A Name represents a domain-name, which consists of character strings separated by dots.
/// Each section of a name is called label
/// ex: `google.com` consists of two labels `google` and `com`
///
/// Parsing expands compression pointers, writing always produces the uncompressed form.
/// Name comparison and hashing ignore ASCII case, following the DNS convention.
#[derive(Eq, Clone)]
pub struct Name<'a> {
    labels: Vec<Label<'a>>,
}

impl<'a> Name<'a> {
    /// Creates a new validated Name
    pub fn new(name: &'a str) -> crate::Result<Self> {
        let mut labels = Vec::new();
        let mut total_size = 1;
        for data in name.split('.').filter(|d| !d.is_empty()) {
            total_size += data.len() + 1;
            labels.push(Label::new(data.as_bytes())?);
        }

        if total_size > MAX_NAME_LENGTH {
            Err(crate::DnsWireError::InvalidName)
        } else {
            Ok(Self { labels })
        }
    }

    /// Create a new Name without checking for size limits
    pub fn new_unchecked(name: &'a str) -> Self {
        let labels = name
            .split('.')
            .filter(|d| !d.is_empty())
            .map(|data| Label::new_unchecked(data.as_bytes()))
            .collect();

        Self { labels }
    }

    /// Returns the root name (zero labels)
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Returns true if this name is the root name
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of labels in this name
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns an Iter of this Name Labels
    pub fn iter(&'a self) -> std::slice::Iter<'a, Label<'a>> {
        self.labels.iter()
    }

    /// Returns true if self is a subdomain of other
    pub fn is_subdomain_of(&self, other: &Name) -> bool {
        self.labels.len() >= other.labels.len()
            && other
                .iter()
                .rev()
                .zip(self.labels.iter().rev())
                .all(|(o, s)| *o == *s)
    }

    /// Transforms the inner data into it's owned type
    pub fn into_owned<'b>(self) -> Name<'b> {
        Name {
            labels: self.labels.into_iter().map(|l| l.into_owned()).collect(),
        }
    }

    /// Get the labels that compose this name
    pub fn get_labels(&'_ self) -> &'_ [Label<'_>] {
        &self.labels[..]
    }
}

impl<'a> WireFormat<'a> for Name<'a> {
    const MINIMUM_LEN: usize = 1;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let mut labels = Vec::new();

        // read position to restore after following the first pointer
        let mut resume: Option<BytesBuffer<'a>> = None;
        let mut hops = 0usize;
        let mut name_size = 0usize;

        loop {
            let length = data.get_u8()?;
            match length {
                0 => break,
                length if length & POINTER_MASK == POINTER_MASK => {
                    hops += 1;
                    if hops > MAX_POINTER_HOPS {
                        return Err(crate::DnsWireError::InvalidCompressionPointer);
                    }

                    let low = data.get_u8()?;
                    let target = u16::from_be_bytes([length & !POINTER_MASK, low]) as usize;

                    if resume.is_none() {
                        resume = Some(data.clone());
                    }

                    // pointers may only point backwards in the message
                    *data = data.new_at(target)?;
                }
                length if length & POINTER_MASK != 0 => {
                    // extended (01) and unallocated (10) label types
                    return Err(crate::DnsWireError::InvalidLabel);
                }
                length => {
                    let length = length as usize;
                    name_size += length + 1;
                    if name_size + 1 > MAX_NAME_LENGTH {
                        return Err(crate::DnsWireError::InvalidName);
                    }

                    labels.push(Label::new_unchecked(data.get_slice(length)?));
                }
            }
        }

        if let Some(resume) = resume {
            *data = resume;
        }

        Ok(Self { labels })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        for label in self.labels.iter() {
            out.write_all(&[label.len() as u8])?;
            out.write_all(&label.data)?;
        }

        out.write_all(&[0])?;
        Ok(())
    }

    fn len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }
}

impl<'a> TryFrom<&'a str> for Name<'a> {
    type Error = crate::DnsWireError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

impl Display for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }

        for label in self.labels.iter() {
            f.write_fmt(format_args!("{}.", label))?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Name").field(&format!("{}", self)).finish()
    }
}

impl PartialEq for Name<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Hash for Name<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.labels.hash(state);
    }
}

/// One section of a [`Name`], up to 63 bytes.
/// Comparison and hashing ignore ASCII case.
#[derive(Eq, Clone)]
pub struct Label<'a> {
    data: Cow<'a, [u8]>,
}

impl<'a> Label<'a> {
    /// Creates a new validated Label
    pub fn new<T: Into<Cow<'a, [u8]>>>(data: T) -> crate::Result<Self> {
        let label = Self::new_unchecked(data);
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            Err(crate::DnsWireError::InvalidLabel)
        } else {
            Ok(label)
        }
    }

    /// Creates a new Label without validating its length
    pub fn new_unchecked<T: Into<Cow<'a, [u8]>>>(data: T) -> Self {
        Self { data: data.into() }
    }

    /// Length of this label in bytes, excluding the length prefix
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this label contains no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Transforms the inner data into it's owned type
    pub fn into_owned<'b>(self) -> Label<'b> {
        Label {
            data: self.data.into_owned().into(),
        }
    }
}

impl PartialEq for Label<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data.eq_ignore_ascii_case(&other.data)
    }
}

impl Hash for Label<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for b in self.data.iter() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl Display for Label<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl std::fmt::Debug for Label<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label")
            .field("data", &self.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::hash_map::DefaultHasher, hash::Hasher};

    use super::*;

    #[test]
    fn construct_valid_names() {
        assert!(Name::new("some").is_ok());
        assert!(Name::new("some.local").is_ok());
        assert!(Name::new("some.local.").is_ok());
        assert!(Name::new("\u{1F600}.local.").is_ok());

        let big_label = "a".repeat(64);
        assert!(Name::new(&big_label).is_err());
    }

    #[test]
    fn parse_without_compression() {
        let data = b"\x00\x00\x00\x01F\x03ISI\x04ARPA\x00\x03FOO\x01F\x03ISI\x04ARPA\x00";
        let mut buffer = BytesBuffer::new(data);
        buffer.advance(3).unwrap();

        let name = Name::parse(&mut buffer).unwrap();
        assert_eq!("F.ISI.ARPA.", name.to_string());

        let name = Name::parse(&mut buffer).unwrap();
        assert_eq!("FOO.F.ISI.ARPA.", name.to_string());
    }

    #[test]
    fn parse_with_compression() {
        let data = b"\x00\x00\x00\x01F\x03ISI\x04ARPA\x00\x03FOO\xc0\x03\x03BAR\xc0\x03";
        let mut buffer = BytesBuffer::new(data);
        buffer.advance(3).unwrap();

        let name = Name::parse(&mut buffer).unwrap();
        assert_eq!("F.ISI.ARPA.", name.to_string());

        let name = Name::parse(&mut buffer).unwrap();
        assert_eq!("FOO.F.ISI.ARPA.", name.to_string());

        let name = Name::parse(&mut buffer).unwrap();
        assert_eq!("BAR.F.ISI.ARPA.", name.to_string());
        assert!(!buffer.has_remaining());
    }

    #[test]
    fn parse_resumes_after_the_first_pointer() {
        let data = b"\x01F\x03ISI\x04ARPA\x00\x03FOO\xc0\x00\xff";
        let mut buffer = BytesBuffer::new(data);
        buffer.advance(12).unwrap();

        let name = Name::parse(&mut buffer).unwrap();
        assert_eq!("FOO.F.ISI.ARPA.", name.to_string());
        assert_eq!(0xff, buffer.get_u8().unwrap());
    }

    #[test]
    fn parse_rejects_forward_pointer() {
        let data = b"\x01F\x00\x03FOO\xc0\x07\x03BAR\x00";
        let mut buffer = BytesBuffer::new(data);
        buffer.advance(3).unwrap();

        assert_eq!(
            Err(crate::DnsWireError::InvalidCompressionPointer),
            Name::parse(&mut buffer)
        );
    }

    #[test]
    fn parse_rejects_self_pointer() {
        let data = b"\x01F\x00\xc0\x03";
        let mut buffer = BytesBuffer::new(data);
        buffer.advance(3).unwrap();

        assert!(Name::parse(&mut buffer).is_err());
    }

    #[test]
    fn parse_root_name() {
        let data = b"\x00\x00\x01";
        let mut buffer = BytesBuffer::new(data);
        buffer.advance(1).unwrap();

        let name = Name::parse(&mut buffer).unwrap();
        assert!(name.is_root());
        assert_eq!(".", name.to_string());
        assert_eq!(1, name.len());
    }

    #[test]
    fn parse_rejects_extended_label_types() {
        let data = b"\x41F\x00";
        let mut buffer = BytesBuffer::new(data);

        assert_eq!(
            Err(crate::DnsWireError::InvalidLabel),
            Name::parse(&mut buffer)
        );
    }

    #[test]
    fn write_to_is_always_uncompressed() {
        let mut bytes = Vec::with_capacity(30);

        Name::new_unchecked("_srv._udp.local")
            .write_to(&mut bytes)
            .unwrap();

        assert_eq!(b"\x04_srv\x04_udp\x05local\x00", &bytes[..]);

        let mut bytes = Vec::with_capacity(30);
        Name::new_unchecked("_srv._udp.local2.")
            .write_to(&mut bytes)
            .unwrap();

        assert_eq!(b"\x04_srv\x04_udp\x06local2\x00", &bytes[..]);
    }

    #[test]
    fn len_matches_written_bytes() -> crate::Result<()> {
        let mut bytes = Vec::new();
        let name = Name::new_unchecked("ex.com.");
        name.write_to(&mut bytes)?;

        assert_eq!(8, bytes.len());
        assert_eq!(bytes.len(), name.len());
        assert_eq!(8, Name::parse(&mut BytesBuffer::new(&bytes))?.len());

        Ok(())
    }

    #[test]
    fn eq_ignores_case() -> crate::Result<()> {
        assert_eq!(Name::new("example.com")?, Name::new("example.com")?);
        assert_eq!(Name::new("Example.COM")?, Name::new("example.com")?);
        assert_ne!(Name::new("some.example.com")?, Name::new("example.com")?);
        assert_ne!(Name::new("example.co")?, Name::new("example.com")?);

        Ok(())
    }

    #[test]
    fn hash_ignores_case() -> crate::Result<()> {
        assert_eq!(
            get_hash(&Name::new("F.ISI.ARPA")?),
            get_hash(&Name::new("f.isi.arpa")?)
        );

        let data = b"\x00\x00\x00\x01F\x03ISI\x04ARPA\x00\x03FOO\xc0\x03";
        let mut buffer = BytesBuffer::new(data);
        buffer.advance(3).unwrap();
        assert_eq!(
            get_hash(&Name::new("f.isi.arpa")?),
            get_hash(&Name::parse(&mut buffer)?)
        );

        Ok(())
    }

    fn get_hash(name: &Name) -> u64 {
        let mut hasher = DefaultHasher::default();
        name.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn is_subdomain_of() {
        assert!(
            Name::new_unchecked("example.com").is_subdomain_of(&Name::new_unchecked("example.com"))
        );
        assert!(Name::new_unchecked("sub.example.com")
            .is_subdomain_of(&Name::new_unchecked("example.com")));
        assert!(!Name::new_unchecked("example.com")
            .is_subdomain_of(&Name::new_unchecked("example.xom")));
        assert!(!Name::new_unchecked("domain.com")
            .is_subdomain_of(&Name::new_unchecked("domain.com.br")));
    }
}
