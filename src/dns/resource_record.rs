use crate::{bytes_buffer::BytesBuffer, QCLASS, QTYPE};

use super::{rdata::RData, Name, WireFormat, CLASS, TYPE};
use std::{borrow::Cow, convert::TryInto, hash::Hash};

/// Resource Records are used to represent the answer, authority, and additional sections in DNS packets.
#[derive(Debug, Eq, Clone)]
pub struct ResourceRecord<'a> {
    /// A [`Name`] to which this resource record pertains.
    pub name: Name<'a>,
    /// A [`CLASS`] that defines the class of the rdata field
    pub class: CLASS,
    /// The time interval (in seconds) that the resource record may be cached before it should be discarded.
    /// Zero values are interpreted to mean that the RR can only be used for the transaction in progress, and should not be cached.
    pub ttl: u32,
    /// A [`RData`] with the contents of this resource record
    pub rdata: RData<'a>,

    /// The raw rdata bytes as they appeared on the wire, empty for records built in memory
    rdata_bytes: Cow<'a, [u8]>,
}

impl<'a> ResourceRecord<'a> {
    /// Creates a new ResourceRecord
    pub fn new(name: Name<'a>, class: CLASS, ttl: u32, rdata: RData<'a>) -> Self {
        Self {
            name,
            class,
            ttl,
            rdata,
            rdata_bytes: Cow::Borrowed(&[]),
        }
    }

    /// The raw rdata bytes this record was parsed from.
    /// Empty for records that were not parsed from a message.
    pub fn rdata_bytes(&self) -> &[u8] {
        &self.rdata_bytes
    }

    /// Return true if current resource match given query class
    pub fn match_qclass(&self, qclass: QCLASS) -> bool {
        match qclass {
            QCLASS::CLASS(class) => class == self.class,
            QCLASS::ANY => true,
        }
    }

    /// Return true if current resource match given query type
    pub fn match_qtype(&self, qtype: QTYPE) -> bool {
        let type_code = u16::from(self.rdata.type_code());
        match qtype {
            QTYPE::ANY => true,
            QTYPE::AXFR => true,
            QTYPE::MAILB => matches!(type_code, 7 | 8 | 9),
            QTYPE::MAILA => type_code == 15,
            QTYPE::TYPE(ty) => ty == self.rdata.type_code(),
        }
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> ResourceRecord<'b> {
        ResourceRecord {
            name: self.name.into_owned(),
            class: self.class,
            ttl: self.ttl,
            rdata: self.rdata.into_owned(),
            rdata_bytes: Cow::Owned(self.rdata_bytes.into_owned()),
        }
    }

    fn write_common<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&u16::from(self.rdata.type_code()).to_be_bytes())?;

        if let RData::OPT(ref opt) = self.rdata {
            out.write_all(&opt.udp_payload_size.to_be_bytes())?;
            out.write_all(&opt.encode_ttl().to_be_bytes())?;
        } else {
            out.write_all(&(self.class as u16).to_be_bytes())?;
            out.write_all(&self.ttl.to_be_bytes())?;
        }

        Ok(())
    }
}

impl<'a> WireFormat<'a> for ResourceRecord<'a> {
    const MINIMUM_LEN: usize = 10;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let name = Name::parse(data)?;

        let class_value = data.peek_u16_in(2)?;
        let ttl = data.peek_u32_in(4)?;
        let rdata_length = data.peek_u16_in(8)? as usize;

        // keep the raw rdata around, records of unsupported types and dnssec
        // validation both need the original bytes
        data.mark();
        data.advance(10)?;
        let rdata_bytes = Cow::Borrowed(data.get_slice(rdata_length)?);
        data.reset();

        let rdata = RData::parse(data)?;

        let class = if rdata.type_code() == TYPE::OPT {
            // the class slot of an OPT record holds the udp payload size
            CLASS::IN
        } else {
            class_value.try_into()?
        };

        Ok(Self {
            name,
            class,
            ttl,
            rdata,
            rdata_bytes,
        })
    }

    fn len(&self) -> usize {
        self.name.len() + self.rdata.len() + Self::MINIMUM_LEN
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        self.name.write_to(out)?;
        self.write_common(out)?;
        out.write_all(&(self.rdata.len() as u16).to_be_bytes())?;
        self.rdata.write_to(out)
    }
}

impl Hash for ResourceRecord<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.class.hash(state);
        self.rdata.hash(state);
    }
}

impl PartialEq for ResourceRecord<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.class == other.class && self.rdata == other.rdata
    }
}
