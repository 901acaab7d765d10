// Domain layer: capability traits only. The five demos share no state and
// never depend on each other; they only share this file's convention of
// putting the trait seam first.

pub mod ports;
