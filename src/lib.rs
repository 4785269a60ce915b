/*!
huffcodec compresses text with huffman codes, a prefix code which assigns short codes to frequent
characters.

The code is built greedily: the two least frequent nodes are merged until a single tree is left. Ties
between equal frequencies are resolved deterministically, so the same text always produces the same
code. Walking the tree yields a code for every character, '0' for a left and '1' for a right branch.

```
use huffcodec::Codec;

let text = "a dead dad ceded a bad babe a beaded abaca bed";
let mut codec = Codec::from_text(text).unwrap();
let bytes = codec.encode_bin(text).unwrap();
assert_eq!(codec.decode_bin(&bytes).unwrap(), text);
```

[`compress`] and [`decompress`] wrap the packed bytes into a container carrying the frequency table
and the padding, so the text can be restored without the original codec.

*/

pub mod codec;
pub mod container;

pub use crate::codec::{Codec, Packed};
pub use crate::container::{compress, decompress};
pub use bitstream::BitString;
pub use common::{BucketMultimap, CodecError, Result, Symbol, Weight};
pub use hufftree::{count, Node, Tree, TreeBuilder};
