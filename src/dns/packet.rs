use crate::{bytes_buffer::BytesBuffer, rdata::OPT, OPCODE};

use super::{rdata::RData, Header, Question, RRSet, ResourceRecord, WireFormat, TYPE};

/// Represents a DNS message
///
/// Records of each section are grouped into [`RRSet`]s by owner name, class and type.
/// The section counts of the [`Header`] are derived from the actual section contents,
/// both after parsing and when writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet<'a> {
    /// Message header
    pub header: Header,
    /// Questions section
    pub questions: Vec<Question<'a>>,
    /// Answers section
    pub answers: Vec<RRSet<'a>>,
    /// Name servers section
    pub name_servers: Vec<RRSet<'a>>,
    /// Additional records section
    pub additional_records: Vec<RRSet<'a>>,
}

impl<'a> Packet<'a> {
    /// Creates a new empty packet with a query header
    pub fn new_query(id: u16) -> Self {
        Self {
            header: Header::new_query(id),
            questions: Vec::new(),
            answers: Vec::new(),
            name_servers: Vec::new(),
            additional_records: Vec::new(),
        }
    }

    /// Creates a new empty packet with a reply header
    pub fn new_reply(id: u16) -> Self {
        Self {
            header: Header::new_reply(id, OPCODE::StandardQuery),
            questions: Vec::new(),
            answers: Vec::new(),
            name_servers: Vec::new(),
            additional_records: Vec::new(),
        }
    }

    /// Changes this packet into a reply packet by replacing its header
    pub fn into_reply(mut self) -> Self {
        self.header = Header::new_reply(self.header.id, self.header.opcode);
        self
    }

    /// Parses a packet from a slice of bytes
    pub fn parse(data: &'a [u8]) -> crate::Result<Self> {
        let mut data = BytesBuffer::new(data);
        let header = Header::parse(&mut data)?;

        let mut questions = Vec::with_capacity(header.questions as usize);
        for _ in 0..header.questions {
            questions.push(Question::parse(&mut data)?);
        }

        let answers = Self::parse_section(&mut data, header.answers)?;
        let name_servers = Self::parse_section(&mut data, header.name_servers)?;
        let additional_records = Self::parse_section(&mut data, header.additional_records)?;

        let mut packet = Self {
            header,
            questions,
            answers,
            name_servers,
            additional_records,
        };
        packet.sync_header_counts();

        Ok(packet)
    }

    fn parse_section(data: &mut BytesBuffer<'a>, count: u16) -> crate::Result<Vec<RRSet<'a>>> {
        let mut sets = Vec::new();
        for _ in 0..count {
            RRSet::merge_record(&mut sets, ResourceRecord::parse(data)?);
        }

        Ok(sets)
    }

    /// Add a [`Question`] to this packet
    pub fn add_question(&mut self, question: Question<'a>) {
        self.questions.push(question);
        self.sync_header_counts();
    }

    /// Add an answer record to this packet, merging it into its [`RRSet`]
    pub fn add_answer(&mut self, answer: ResourceRecord<'a>) {
        RRSet::merge_record(&mut self.answers, answer);
        self.sync_header_counts();
    }

    /// Add a name server record to this packet, merging it into its [`RRSet`]
    pub fn add_name_server(&mut self, name_server: ResourceRecord<'a>) {
        RRSet::merge_record(&mut self.name_servers, name_server);
        self.sync_header_counts();
    }

    /// Add an additional record to this packet, merging it into its [`RRSet`].
    /// Fails when adding a second OPT record, a message must carry at most one.
    pub fn add_additional_record(
        &mut self,
        additional_record: ResourceRecord<'a>,
    ) -> crate::Result<()> {
        if additional_record.rdata.type_code() == TYPE::OPT && self.opt().is_some() {
            return Err(crate::DnsWireError::InvalidDnsMessage);
        }

        RRSet::merge_record(&mut self.additional_records, additional_record);
        self.sync_header_counts();
        Ok(())
    }

    /// The OPT record of this packet, if any
    pub fn opt(&self) -> Option<&OPT<'a>> {
        self.additional_records
            .iter()
            .filter(|set| set.rr_type() == TYPE::OPT)
            .flat_map(|set| set.records())
            .find_map(|record| match &record.rdata {
                RData::OPT(opt) => Some(opt),
                _ => None,
            })
    }

    /// Creates a new [`Vec<u8>`] with the contents of this packet, ready to be sent.
    /// Names are always written in their uncompressed form.
    pub fn build_bytes_vec(&self) -> crate::Result<Vec<u8>> {
        let mut out = Vec::new();

        self.header.write_to(
            &mut out,
            self.questions.len() as u16,
            RRSet::count_records(&self.answers) as u16,
            RRSet::count_records(&self.name_servers) as u16,
            RRSet::count_records(&self.additional_records) as u16,
        )?;

        for question in &self.questions {
            question.write_to(&mut out)?;
        }

        Self::write_section(&mut out, &self.answers)?;
        Self::write_section(&mut out, &self.name_servers)?;
        Self::write_section(&mut out, &self.additional_records)?;

        Ok(out)
    }

    fn write_section(out: &mut Vec<u8>, section: &[RRSet]) -> crate::Result<()> {
        for record in section.iter().flat_map(|set| set.records()) {
            record.write_to(out)?;
        }

        Ok(())
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> Packet<'b> {
        Packet {
            header: self.header,
            questions: self.questions.into_iter().map(|q| q.into_owned()).collect(),
            answers: self.answers.into_iter().map(|s| s.into_owned()).collect(),
            name_servers: self
                .name_servers
                .into_iter()
                .map(|s| s.into_owned())
                .collect(),
            additional_records: self
                .additional_records
                .into_iter()
                .map(|s| s.into_owned())
                .collect(),
        }
    }

    fn sync_header_counts(&mut self) {
        self.header.questions = self.questions.len() as u16;
        self.header.answers = RRSet::count_records(&self.answers) as u16;
        self.header.name_servers = RRSet::count_records(&self.name_servers) as u16;
        self.header.additional_records = RRSet::count_records(&self.additional_records) as u16;
    }
}
