use crate::seq::dna::DnaSeq;

/// A loaded sequence together with the header it was read under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: Option<Box<str>>,
    pub desc: Option<Box<str>>,
    pub seq: DnaSeq,
}

impl SeqRecord {
    pub fn new(seq: DnaSeq) -> Self {
        Self {
            id: None,
            desc: None,
            seq,
        }
    }

    pub fn with_id(mut self, id: impl Into<Box<str>>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &DnaSeq {
        &self.seq
    }

    pub fn into_seq(self) -> DnaSeq {
        self.seq
    }
}
