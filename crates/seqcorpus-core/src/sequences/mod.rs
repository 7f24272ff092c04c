pub mod label_dictionary;
pub mod sequence;
pub mod sequence_list;
pub mod shared;
pub mod word_counts;

pub use label_dictionary::LabelDictionary;
pub use sequence::{Sequence, Translation};
pub use sequence_list::SequenceList;
pub use shared::SharedDictionary;
pub use word_counts::WordCounts;
