// symbol_value
/// Implement [`FieldValue`](crate::traits::FieldValue) for a fieldless
/// domain enum by normalizing each variant to its name as text.
#[macro_export]
macro_rules! symbol_value {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::traits::FieldValue for $ty {
            fn to_value(&self) -> $crate::value::Value {
                match self {
                    $(Self::$variant => {
                        $crate::value::Value::Text(stringify!($variant).to_string())
                    })+
                }
            }
        }
    };
}
