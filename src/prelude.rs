//! Everything most callers need, in one `use rosegen::prelude::*;`.

pub use crate::bind::{bind, bind_filter};
pub use crate::collect::{fixed_list, fixed_map, list_of, map_of, non_empty, tuple, uniq_list_of};
pub use crate::error::{Error, Result};
pub use crate::frequency::{frequency, one_of, Weighted};
pub use crate::generator::Generator;
pub use crate::lazy_tree::LazyTree;
pub use crate::map::map;
pub use crate::primitive::{boolean, byte, constant, integer, integer_in_range, member_of, uniform_float};
pub use crate::random::{Random, Seed};
pub use crate::run::{run, Sample};
pub use crate::size::{no_shrink, resize, scale, sized};
pub use crate::state::State;
pub use crate::text::{ascii_char, ascii_string, atom, byte_string, char_in_range, digit, keyword_of, letter, string_of, word};
pub use crate::tree::tree;
