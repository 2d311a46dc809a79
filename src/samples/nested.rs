//! Multi-level test record
//!
//! Four levels deep (`Nested` → `Branch` → `Twig` → `Leaf`), with every
//! scalar kind at the root. Each level implements `Describe` on its own and
//! the parent registers it with `collection_of`.

use std::collections::LinkedList;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{CodecContext, Describe};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub value: u64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Twig {
    pub value: u32,
    pub label: String,
    pub leaves: Vec<Leaf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub value: u16,
    pub label: String,
    pub twigs: Vec<Twig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nested {
    pub small: u16,
    pub medium: u32,
    pub tiny: u8,
    pub single: f32,
    pub double: f64,
    pub large: u64,
    pub label: String,
    pub branches: Vec<Branch>,
    pub loose_twigs: LinkedList<Twig>,
}

impl Describe for Leaf {
    fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()> {
        ctx.scalar(&mut self.value)?;
        ctx.scalar(&mut self.label)
    }
}

impl Describe for Twig {
    fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()> {
        ctx.scalar(&mut self.value)?;
        ctx.scalar(&mut self.label)?;
        ctx.collection_of(&mut self.leaves)
    }
}

impl Describe for Branch {
    fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()> {
        ctx.scalar(&mut self.value)?;
        ctx.scalar(&mut self.label)?;
        ctx.collection_of(&mut self.twigs)
    }
}

impl Describe for Nested {
    fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()> {
        ctx.scalar(&mut self.small)?;
        ctx.scalar(&mut self.medium)?;
        ctx.scalar(&mut self.tiny)?;
        ctx.scalar(&mut self.single)?;
        ctx.scalar(&mut self.double)?;
        ctx.scalar(&mut self.large)?;
        ctx.scalar(&mut self.label)?;
        ctx.collection_of(&mut self.branches)?;
        ctx.collection_of(&mut self.loose_twigs)
    }
}

impl Twig {
    fn with_leaf(value: u32, label: &str, leaf_value: u64) -> Self {
        Self {
            value,
            label: label.to_string(),
            leaves: vec![Leaf {
                value: leaf_value,
                label: "Leaf.label in Twig.leaves[0]".to_string(),
            }],
        }
    }
}

impl Nested {
    /// Two branches and one loose twig, each carrying a leaf
    pub fn sample() -> Self {
        let branch = |twig_value| Branch {
            value: 201,
            label: "Branch.label in Nested.branches".to_string(),
            twigs: vec![Twig::with_leaf(twig_value, "Twig.label in Branch.twigs[0]", 301)],
        };

        Self {
            small: 101,
            medium: 102,
            tiny: 3,
            single: 16.16,
            double: 16.18,
            large: 104,
            label: "str2_in_Nested".to_string(),
            branches: vec![branch(3), branch(401)],
            loose_twigs: LinkedList::from([Twig::with_leaf(
                401,
                "Twig.label in Nested.loose_twigs[0]",
                301,
            )]),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{value:{}, label:{}}}", self.value, self.label)
    }
}

impl fmt::Display for Twig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{value:{}, label:{}, leaves:[", self.value, self.label)?;
        for leaf in &self.leaves {
            write!(f, "{}, ", leaf)?;
        }
        write!(f, "]}}")
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{value:{}, label:{}, twigs:[", self.value, self.label)?;
        for twig in &self.twigs {
            write!(f, "\n    {},", twig)?;
        }
        write!(f, "]}}")
    }
}

impl fmt::Display for Nested {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "small:{}, medium:{}, tiny:{}, large:{}, single:{}, double:{}, label:{}",
            self.small, self.medium, self.tiny, self.large, self.single, self.double, self.label
        )?;
        write!(f, "branches:[")?;
        for branch in &self.branches {
            write!(f, "\n  {},", branch)?;
        }
        writeln!(f, "]")?;
        write!(f, "loose_twigs:[")?;
        for twig in &self.loose_twigs {
            write!(f, "\n  {},", twig)?;
        }
        write!(f, "]")
    }
}
