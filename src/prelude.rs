pub use crate::{
    collection_id, encode_rows, read_alignment, read_alignment_path, Alignment, DataType, Error,
    RepeatBounds, Result, RowParser, Sequence, StateCodec,
};
