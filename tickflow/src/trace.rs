//! Waveform capture and Value Change Dump output.

use std::io::{self, Write};
use std::iter;

use arrayvec::ArrayVec;
use itertools::*;
use linked_hash_map::LinkedHashMap;

use crate::*;

/// Location of a traced variable inside a recorded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Var {
    offset: usize,
    width: usize,
}

/// Per-tick record of a module's input, output and state.
///
/// Variables are named after the flattened port declarations, prefixed with `in`, `out` and `st`.
#[derive(Debug, Clone)]
pub struct Trace {
    name: String,
    vars: LinkedHashMap<String, Var>,
    samples: Vec<(u64, Vec<bool>)>,
}

impl Trace {
    /// Creates an empty trace for the ports of module `M`.
    pub fn new<M: Module + ?Sized>(name: &str) -> Self {
        let leaves = iter::empty()
            .chain(<M::Input as Signal>::port_decls().flatten(Some("in".to_string())))
            .chain(<M::Output as Signal>::port_decls().flatten(Some("out".to_string())))
            .chain(<M::State as Signal>::port_decls().flatten(Some("st".to_string())));

        let mut vars = LinkedHashMap::new();
        let mut offset = 0;
        for (leaf, width) in leaves {
            let base = leaf.unwrap_or_else(|| "anon".to_string());
            let mut var_name = base.clone();
            let mut suffix = 1;
            while vars.contains_key(&var_name) {
                var_name = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            vars.insert(var_name, Var { offset, width });
            offset += width;
        }

        Self { name: name.to_string(), vars, samples: Vec::new() }
    }

    /// Returns trace name.
    pub fn name(&self) -> &str { &self.name }

    /// Returns the number of recorded ticks.
    pub fn len(&self) -> usize { self.samples.len() }

    /// Returns whether no tick was recorded.
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Returns the names of the traced variables in declaration order.
    pub fn var_names(&self) -> impl Iterator<Item = &str> { self.vars.keys().map(String::as_str) }

    /// Records one tick.
    pub fn record<I: Signal, O: Signal, S: Signal>(&mut self, tick: u64, input: I, output: O, state: S) {
        let bits = iter::empty().chain(input.transl()).chain(output.transl()).chain(state.transl()).collect::<Vec<_>>();
        self.samples.push((tick, bits));
    }

    /// Returns the value of variable `var` at the `index`-th recorded tick.
    pub fn value(&self, index: usize, var: &str) -> Option<u64> {
        let var = self.vars.get(var)?;
        let (_, bits) = self.samples.get(index)?;
        Some(bitvec_to_u64(&bits[var.offset..var.offset + var.width]))
    }

    /// Writes the trace in Value Change Dump format, one time unit per tick.
    ///
    /// Values are dumped only when they change.
    pub fn write_vcd<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "$version tickflow $end")?;
        writeln!(w, "$timescale 1ns $end")?;
        writeln!(w, "$scope module {} $end", self.name)?;
        for (index, (name, var)) in self.vars.iter().enumerate() {
            writeln!(w, "$var wire {} {} {} $end", var.width, vcd_id(index), name)?;
        }
        writeln!(w, "$upscope $end")?;
        writeln!(w, "$enddefinitions $end")?;

        let mut prev: Option<&[bool]> = None;
        for (tick, bits) in &self.samples {
            let changes = self
                .vars
                .values()
                .enumerate()
                .filter(|(_, var)| {
                    prev.map_or(true, |prev| prev[var.offset..var.offset + var.width] != bits[var.offset..var.offset + var.width])
                })
                .map(|(index, var)| vcd_value(&bits[var.offset..var.offset + var.width], index))
                .collect::<Vec<_>>();

            if prev.is_none() {
                writeln!(w, "#{}", tick)?;
                writeln!(w, "$dumpvars")?;
                writeln!(w, "{}", changes.iter().join("\n"))?;
                writeln!(w, "$end")?;
            } else if !changes.is_empty() {
                writeln!(w, "#{}", tick)?;
                writeln!(w, "{}", changes.iter().join("\n"))?;
            }
            prev = Some(bits.as_slice());
        }

        if let Some((tick, _)) = self.samples.last() {
            writeln!(w, "#{}", tick + 1)?;
        }
        Ok(())
    }
}

/// Returns the short identifier code of the `index`-th variable, drawn from printable ASCII.
fn vcd_id(mut index: usize) -> String {
    const FIRST: u8 = b'!';
    const BASE: usize = (b'~' - b'!') as usize + 1;

    let mut code = ArrayVec::<u8, 8>::new();
    loop {
        code.push(FIRST + (index % BASE) as u8);
        index /= BASE;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    code.iter().map(|c| *c as char).collect()
}

fn vcd_value(bits: &[bool], index: usize) -> String {
    let id = vcd_id(index);
    match bits {
        [bit] => format!("{}{}", u8::from(*bit), id),
        _ => format!("b{} {}", bits.iter().rev().map(|bit| u8::from(*bit)).join(""), id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Signal)]
    struct Out {
        pulse: bool,
        count: Bits<3>,
    }

    fn pulse_counter() -> Fsm<bool, Out, Bits<3>, fn(bool, &Bits<3>) -> (Out, Bits<3>)> {
        Fsm::new("pulse_counter", Bits::ZERO, |input: bool, count: &Bits<3>| {
            let next = if input { Bits::new(count.value() + 1) } else { *count };
            (Out { pulse: input, count: *count }, next)
        })
    }

    #[test]
    fn names_follow_port_decls() {
        let trace = Trace::new::<Fsm<bool, Out, Bits<3>, fn(bool, &Bits<3>) -> (Out, Bits<3>)>>("t");
        assert_eq!(trace.var_names().collect::<Vec<_>>(), vec!["in", "out_pulse", "out_count", "st"]);
    }

    #[test]
    fn records_values() {
        let mut inst = Instance::traced(pulse_counter(), "pulse_counter");
        for input in [true, true, false, true] {
            inst.tick(input);
        }
        let trace = inst.take_trace().unwrap();
        assert_eq!(trace.value(0, "st"), Some(0));
        assert_eq!(trace.value(2, "out_count"), Some(2));
        assert_eq!(trace.value(3, "in"), Some(1));
        assert_eq!(trace.value(4, "in"), None);
        assert_eq!(trace.value(0, "missing"), None);
    }

    #[test]
    fn vcd_dumps_only_changes() {
        let mut inst = Instance::traced(pulse_counter(), "pulse_counter");
        for input in [true, false, false, false] {
            inst.tick(input);
        }
        let mut out = Vec::new();
        inst.take_trace().unwrap().write_vcd(&mut out).unwrap();
        let vcd = String::from_utf8(out).unwrap();

        assert!(vcd.contains("$var wire 1 ! in $end"));
        assert!(vcd.contains("$var wire 3 $ st $end"));
        assert!(vcd.contains("$dumpvars\n1!\n1\"\nb000 #\nb000 $\n$end"));
        assert!(vcd.contains("#1\n0!\n0\"\nb001 #\nb001 $\n"));
        // Nothing changes on ticks 2 and 3.
        assert!(!vcd.contains("#2\n"));
        assert!(vcd.ends_with("#4\n"));
    }

    #[test]
    fn ids_are_unique() {
        let ids = (0..10_000).map(vcd_id).collect::<Vec<_>>();
        assert_eq!(ids.iter().unique().count(), ids.len());
        assert_eq!(vcd_id(0), "!");
        assert_eq!(vcd_id(93), "~");
        assert_eq!(vcd_id(94), "!!");
    }
}
