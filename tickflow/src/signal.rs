use std::fmt::Debug;

use tuple_utils::*;

use crate::*;

/// Port names and bitwidths of a signal.
///
/// A signal is laid out as a tree of named members whose leaves are bit vectors. The layout is
/// what a waveform viewer sees: `Struct([(Some("state"), Bits(2)), (Some("acc"), Bits(8))])` is
/// dumped as the two variables `state` and `acc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortDecls {
    /// Struct of named (or anonymous) members.
    Struct(Vec<(Option<String>, PortDecls)>),

    /// Bit vector of the given width.
    Bits(usize),
}

impl PortDecls {
    /// Total width in bits.
    pub fn width(&self) -> usize {
        match self {
            PortDecls::Struct(inner) => inner.iter().map(|(_, m)| m.width()).sum(),
            PortDecls::Bits(width) => *width,
        }
    }

    /// Flattens the declaration into `(name, width)` leaves, LSB-first field order.
    ///
    /// Names of nested members are joined with `_`; anonymous members inherit their parent's name.
    pub fn flatten(&self, prefix: Option<String>) -> Vec<(Option<String>, usize)> {
        match self {
            PortDecls::Struct(inner) => inner
                .iter()
                .flat_map(|(name, m)| m.flatten(join_options("_", [prefix.clone(), name.clone()])))
                .collect(),
            PortDecls::Bits(0) => vec![],
            PortDecls::Bits(width) => vec![(prefix, *width)],
        }
    }
}

/// Bit-representable values.
pub trait Signal: 'static + Debug + Clone {
    /// Signal's bit width.
    ///
    /// # Note
    ///
    /// `Self::WIDTH` and `Self::port_decls().width()` should be equal.
    const WIDTH: usize;

    /// Serializes the value, LSB first.
    fn transl(self) -> Vec<bool>;

    /// Port names and bitwidths.
    fn port_decls() -> PortDecls;
}

impl Signal for () {
    const WIDTH: usize = 0;

    fn transl(self) -> Vec<bool> { vec![] }

    fn port_decls() -> PortDecls { PortDecls::Bits(0) }
}

impl Signal for bool {
    const WIDTH: usize = 1;

    fn transl(self) -> Vec<bool> { vec![self] }

    fn port_decls() -> PortDecls { PortDecls::Bits(1) }
}

macro_rules! impl_signal_tuple {
    ($a:ident) => {
        impl<$a: Signal> Signal for ($a,) {
            const WIDTH: usize = <$a as Signal>::WIDTH;

            fn transl(self) -> Vec<bool> {
                ::std::iter::empty()
                    .chain(self.0.transl().into_iter())
                    .collect::<Vec<_>>()
            }

            fn port_decls() -> PortDecls {
                PortDecls::Struct(vec![(Some("0".to_string()), <$a as Signal>::port_decls())])
            }
        }
    };
    ($($a:ident)+) => {
        impl<$($a: Signal,)+> Signal for ($($a,)+) {
            const WIDTH: usize = <<Self as SplitLast>::Left as Signal>::WIDTH + <<Self as SplitLast>::Right as Signal>::WIDTH;

            fn transl(self) -> Vec<bool> {
                let (left, right) = SplitLast::split_last(self);

                left.transl()
                    .into_iter()
                    .chain(right.transl())
                    .collect()
            }

            fn port_decls() -> PortDecls {
                match <<Self as SplitLast>::Left as Signal>::port_decls() {
                    PortDecls::Struct(mut mbrs) => {
                        mbrs.push((
                            Some((Self::arity() - 1).to_string()),
                            <<Self as SplitLast>::Right as Signal>::port_decls(),
                        ));
                        PortDecls::Struct(mbrs)
                    }
                    _ => panic!("internal error: tuple prefix is not a struct"),
                }
            }
        }
    };
}

impl_signal_tuple! { V1 }
impl_signal_tuple! { V1 V2 }
impl_signal_tuple! { V1 V2 V3 }
impl_signal_tuple! { V1 V2 V3 V4 }
impl_signal_tuple! { V1 V2 V3 V4 V5 }
impl_signal_tuple! { V1 V2 V3 V4 V5 V6 }
impl_signal_tuple! { V1 V2 V3 V4 V5 V6 V7 }
impl_signal_tuple! { V1 V2 V3 V4 V5 V6 V7 V8 }
impl_signal_tuple! { V1 V2 V3 V4 V5 V6 V7 V8 V9 }
impl_signal_tuple! { V1 V2 V3 V4 V5 V6 V7 V8 V9 V10 }
impl_signal_tuple! { V1 V2 V3 V4 V5 V6 V7 V8 V9 V10 V11 }
impl_signal_tuple! { V1 V2 V3 V4 V5 V6 V7 V8 V9 V10 V11 V12 }

macro_rules! impl_signal {
    ($typ:ty) => {
        impl Signal for $typ {
            const WIDTH: usize = ::std::mem::size_of::<$typ>() * 8;

            fn transl(self) -> Vec<bool> {
                #[allow(trivial_numeric_casts)]
                (0..(::std::mem::size_of::<$typ>() * 8)).map(|i| (self & ((1 as $typ) << i)) != 0).collect::<Vec<_>>()
            }

            fn port_decls() -> PortDecls { PortDecls::Bits(Self::WIDTH) }
        }
    };
}

impl_signal!(u8);
impl_signal!(u16);
impl_signal!(u32);
impl_signal!(u64);
impl_signal!(usize);
