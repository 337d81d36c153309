//! String-valued enumerations for constrained columns.
//!
//! Priority, status, and source are stored and transmitted as the literal
//! strings below ("In Progress", "WhatsApp", ...). Each enum offers the
//! allowed set as `ALL` plus `parse`/`as_str` for validation and defaults.

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every allowed wire/storage value, in declaration order.
            pub const ALL: &'static [&'static str] = &[ $( $label ),+ ];

            /// Parse a wire value. Returns `None` for anything outside the set.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $label => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The wire/storage string for this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }
    };
}

define_choice_enum! {
    /// Task priority. Defaults to `Medium` when a create payload omits it.
    Priority {
        Minimal => "Minimal",
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

define_choice_enum! {
    /// Task status. Free caller choice among the set; no transition graph
    /// is enforced (Completed -> Pending is allowed).
    TaskStatus {
        Pending => "Pending",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

define_choice_enum! {
    /// Channel a context entry came from.
    ContextSource {
        WhatsApp => "WhatsApp",
        Email => "Email",
        Note => "Note",
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}
