//! Organizational records
//!
//! `Company` describes its whole tree in one routine, registering each
//! nested collection with a per-element closure.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{CodecContext, Describe};
use crate::error::{CodecError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub salary: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub departments: VecDeque<Department>,
}

impl Company {
    /// One department holding two employees
    pub fn sample() -> Self {
        let department = Department {
            id: 1,
            name: "nb_department".to_string(),
            employees: vec![
                Employee {
                    id: 1007,
                    name: "nb_employee".to_string(),
                    age: 35,
                    salary: 99999.1,
                },
                Employee {
                    id: 1008,
                    name: "nb_employee2".to_string(),
                    age: 36,
                    salary: 99999.2,
                },
            ],
        };

        Self {
            name: "nb_company".to_string(),
            departments: VecDeque::from([department]),
        }
    }
}

impl Describe for Company {
    fn describe(&mut self, ctx: &mut CodecContext<'_>) -> Result<()> {
        if ctx.is_writing() && self.name.is_empty() {
            return Err(CodecError::rejected("company name is empty"));
        }

        ctx.scalar(&mut self.name)?;
        ctx.collection(&mut self.departments, |ctx, department| {
            ctx.scalar(&mut department.id)?;
            ctx.scalar(&mut department.name)?;
            ctx.collection(&mut department.employees, |ctx, employee| {
                ctx.scalar(&mut employee.id)?;
                ctx.scalar(&mut employee.name)?;
                ctx.scalar(&mut employee.age)?;
                ctx.scalar(&mut employee.salary)
            })
        })
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id:{}, name:{}, age:{}, salary:{}}}",
            self.id, self.name, self.age, self.salary
        )
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id:{}, name:{}, employees:[", self.id, self.name)?;
        for employee in &self.employees {
            write!(f, "\n    {},", employee)?;
        }
        if !self.employees.is_empty() {
            write!(f, "\n  ")?;
        }
        write!(f, "]}}")
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Company name:{}, departments:[", self.name)?;
        for department in &self.departments {
            write!(f, "\n  {},", department)?;
        }
        if !self.departments.is_empty() {
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
