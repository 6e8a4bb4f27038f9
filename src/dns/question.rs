use std::convert::TryFrom;

use crate::bytes_buffer::BytesBuffer;

use super::{Name, WireFormat, QCLASS, QTYPE};

/// Question represents a query in the DNS message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question<'a> {
    /// a [Name](`Name`) to query for
    pub qname: Name<'a>,
    /// a [QTYPE](`QTYPE`) which specifies the type of the query.
    pub qtype: QTYPE,
    /// a [QCLASS](`QCLASS`) which specifies the class of the query, For Example: IN
    pub qclass: QCLASS,
}

impl<'a> Question<'a> {
    /// Creates a new question
    pub fn new(qname: Name<'a>, qtype: QTYPE, qclass: QCLASS) -> Self {
        Self {
            qname,
            qtype,
            qclass,
        }
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> Question<'b> {
        Question {
            qname: self.qname.into_owned(),
            qtype: self.qtype,
            qclass: self.qclass,
        }
    }
}

impl<'a> WireFormat<'a> for Question<'a> {
    const MINIMUM_LEN: usize = 4;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self> {
        let qname = Name::parse(data)?;

        let qtype = data.get_u16()?.into();
        let qclass = QCLASS::try_from(data.get_u16()?)?;

        Ok(Self {
            qname,
            qtype,
            qclass,
        })
    }

    fn len(&self) -> usize {
        self.qname.len() + Self::MINIMUM_LEN
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        self.qname.write_to(out)?;

        out.write_all(&Into::<u16>::into(self.qtype).to_be_bytes())?;
        out.write_all(&Into::<u16>::into(self.qclass).to_be_bytes())
            .map_err(crate::DnsWireError::from)
    }
}
