//! Reading the items of a sequence value into text.
//!
//! The item values of a sequence are not decoded as nested data sets.
//! Each item of defined length contributes its raw bytes, as text,
//! to a space-separated summary of the sequence.
//! Items of undefined length are skipped up to their
//! item delimitation marker.

use super::decode::{
    ReadItemHeaderSnafu, ReadItemValueSnafu, Result, StatefulDecoder, TooManyItemsSnafu,
};
use dicom_lite_core::dictionary::DataDictionary;
use dicom_lite_core::header::{Length, Tag, ITEM, ITEM_DELIMITATION, SEQUENCE_DELIMITATION};
use snafu::ResultExt;
use std::io::{self, Read};
use tracing::warn;

/// The states of the item reading loop.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ItemState {
    /// Expecting an item tag, or the end of a sequence of defined length
    ReadTag,
    /// Expecting the item length after the item tag
    ReadLength(Tag),
    /// Deciding what to do with the item just read
    CheckDelimitation(Tag, Length),
    /// Reading the item value of the given length
    AppendValue(u32),
    /// Skipping an item of undefined length
    SeekDelimitation,
    /// The sequence is over
    Done,
}

/// Whether an I/O error is the end of a sequence of undefined length,
/// which is tolerated.
fn ends_undefined_sequence(data_length: Length, e: &io::Error) -> bool {
    data_length.is_undefined() && e.kind() == io::ErrorKind::UnexpectedEof
}

/// The space-separated concatenation of item values.
#[derive(Debug, Default)]
struct ItemValues(String);

impl ItemValues {
    fn push(&mut self, value: &str) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(value);
    }
}

impl<S, D> StatefulDecoder<S, D>
where
    S: Read,
    D: DataDictionary,
{
    /// Read the items of a sequence value of the given length.
    ///
    /// With a defined `data_length`, items are read until that many
    /// bytes were consumed.
    /// With an undefined length, items are read until the sequence
    /// delimitation marker, or until the end of the stream.
    pub fn read_item(&mut self, data_length: Length) -> Result<String> {
        let mut values = ItemValues::default();
        let mut consumed: u64 = 0;
        let mut items = 0usize;
        let mut state = ItemState::ReadTag;

        loop {
            state = match state {
                ItemState::ReadTag => {
                    if let Some(len) = data_length.get() {
                        if consumed >= u64::from(len) {
                            state = ItemState::Done;
                            continue;
                        }
                    }
                    items += 1;
                    snafu::ensure!(
                        items <= self.options.max_items,
                        TooManyItemsSnafu {
                            max_items: self.options.max_items
                        }
                    );
                    match self.reader.decode_tag(&mut self.from) {
                        Ok(tag) => {
                            self.position += 4;
                            consumed += 4;
                            ItemState::ReadLength(tag)
                        }
                        Err(ref e) if ends_undefined_sequence(data_length, e) => {
                            warn!("Sequence without delimitation ended with the stream");
                            ItemState::Done
                        }
                        Err(e) => {
                            return Err(e).context(ReadItemHeaderSnafu {
                                position: self.position,
                            })
                        }
                    }
                }
                ItemState::ReadLength(tag) => match self.reader.decode_ul(&mut self.from) {
                    Ok(len) => {
                        self.position += 4;
                        consumed += 4;
                        ItemState::CheckDelimitation(tag, Length(len))
                    }
                    Err(ref e) if ends_undefined_sequence(data_length, e) => {
                        warn!("Sequence without delimitation ended with the stream");
                        ItemState::Done
                    }
                    Err(e) => {
                        return Err(e).context(ReadItemHeaderSnafu {
                            position: self.position,
                        })
                    }
                },
                ItemState::CheckDelimitation(tag, len) => {
                    if tag != ITEM && tag != SEQUENCE_DELIMITATION {
                        warn!("Unexpected {} among the items of a sequence", tag);
                    }
                    if len.is_undefined() {
                        ItemState::SeekDelimitation
                    } else if tag == SEQUENCE_DELIMITATION {
                        ItemState::Done
                    } else if len.0 > 0 {
                        ItemState::AppendValue(len.0)
                    } else {
                        ItemState::ReadTag
                    }
                }
                ItemState::AppendValue(len) => {
                    match self.reader.read_string(&mut self.from, len as usize) {
                        Ok(text) => {
                            self.position += u64::from(len);
                            consumed += u64::from(len);
                            values.push(&text);
                            ItemState::ReadTag
                        }
                        Err(ref e) if ends_undefined_sequence(data_length, e) => {
                            warn!("Sequence without delimitation ended with the stream");
                            ItemState::Done
                        }
                        Err(e) => {
                            return Err(e).context(ReadItemValueSnafu {
                                len,
                                position: self.position,
                            })
                        }
                    }
                }
                ItemState::SeekDelimitation => match self.seek_item_delimitation() {
                    Ok(Some(skipped)) => {
                        consumed += skipped;
                        ItemState::ReadTag
                    }
                    Ok(None) => {
                        warn!("Item without delimitation ended with the stream");
                        ItemState::Done
                    }
                    Err(e) => {
                        return Err(e).context(ReadItemHeaderSnafu {
                            position: self.position,
                        })
                    }
                },
                ItemState::Done => break,
            };
        }

        Ok(values.0)
    }

    /// Skip 16-bit words until the item delimitation marker
    /// and its (zero) length were consumed.
    ///
    /// Returns the number of bytes skipped,
    /// or `None` if the stream ended first.
    fn seek_item_delimitation(&mut self) -> io::Result<Option<u64>> {
        let mut skipped = 0u64;
        let mut previous = 0u16;
        loop {
            let word = match self.reader.decode_us(&mut self.from) {
                Ok(word) => word,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            };
            self.position += 2;
            skipped += 2;
            if previous == ITEM_DELIMITATION.group() && word == ITEM_DELIMITATION.element() {
                break;
            }
            previous = word;
        }
        match self.reader.decode_ul(&mut self.from) {
            Ok(_) => {
                self.position += 4;
                Ok(Some(skipped + 4))
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}
