//! Closed vocabularies stored as `TEXT` columns.
//!
//! Each enum round-trips through its database/wire spelling via
//! [`as_str`](BookingStatus::as_str) and [`parse`](BookingStatus::parse).
//! Request DTOs carry these values as plain strings so that an unknown value
//! is reported as a field-level validation error instead of a body rejection.

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every accepted spelling, in declaration order.
            pub const ALL: &'static [&'static str] = &[$( $text ),+];

            /// Database / wire spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }

            /// Parse an exact (case-sensitive) spelling.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_text_enum! {
    /// Booking request pipeline status. Any transition is allowed.
    BookingStatus {
        New => "NEW",
        Contacted => "CONTACTED",
        Negotiating => "NEGOTIATING",
        Confirmed => "CONFIRMED",
        Declined => "DECLINED",
        Completed => "COMPLETED",
    }
}

define_text_enum! {
    /// Player a mix is embedded from.
    EmbedType {
        SoundCloud => "soundcloud",
        Mixcloud => "mixcloud",
        YouTube => "youtube",
    }
}

define_text_enum! {
    /// Musical era a mix or media asset belongs to.
    Decade {
        Seventies => "SEVENTIES",
        Eighties => "EIGHTIES",
        Nineties => "NINETIES",
        Mixed => "MIXED",
    }
}

define_text_enum! {
    /// Kind of media asset in the gallery.
    MediaType {
        Photo => "PHOTO",
        Video => "VIDEO",
        Document => "DOCUMENT",
        Audio => "AUDIO",
    }
}

define_text_enum! {
    /// Back-office account role. Every role has full admin scope.
    AdminRole {
        SuperAdmin => "SUPER_ADMIN",
        Admin => "ADMIN",
        Editor => "EDITOR",
    }
}
