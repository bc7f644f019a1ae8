use pulse_source::{MemorySource, PostgrestClient, Query, QuerySource, Row, SourceError};

/// The query sources the binary can run against.
#[derive(Debug, Clone)]
pub enum AnySource {
    Postgrest(PostgrestClient),
    Memory(MemorySource),
}

impl QuerySource for AnySource {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<Vec<Row>, SourceError>> + Send {
        async move {
            match self {
                Self::Postgrest(client) => client.fetch(query).await,
                Self::Memory(memory) => memory.fetch(query).await,
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Postgrest(client) => client.describe(),
            Self::Memory(memory) => memory.describe(),
        }
    }
}
