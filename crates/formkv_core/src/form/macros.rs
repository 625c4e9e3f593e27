/// Implement [`FormStruct`](crate::form::FormStruct) and
/// [`FormValue`](crate::form::FormValue) for a struct from a field listing.
///
/// Each field may carry `tag_name = "raw tag"` pairs; fields without tags are
/// keyed by their declared name. Fields are encoded in listing order.
///
/// ```
/// use formkv::form::Encoder;
///
/// struct Auth {
/// 	ak: Option<String>,
/// }
///
/// struct Request {
/// 	auth: Auth,
/// 	region: String,
/// 	secret: String,
/// }
///
/// formkv::form_struct!(Auth { ak [form = "ak"] });
/// formkv::form_struct!(Request {
/// 	auth [form = "..."],
/// 	region,
/// 	secret [form = "-"],
/// });
///
/// let request = Request {
/// 	auth: Auth { ak: Some("key".to_owned()) },
/// 	region: "eu".to_owned(),
/// 	secret: "hidden".to_owned(),
/// };
/// let kvs = Encoder::default().encode(&request).unwrap();
/// let pairs: Vec<_> = kvs.iter().map(|kv| (kv.key(), kv.value())).collect();
/// assert_eq!(pairs, vec![("ak", "key"), ("region", "eu")]);
/// ```
#[macro_export]
macro_rules! form_struct {
	($ty:ident { $($field:ident $([$($tag:ident = $raw:literal),* $(,)?])?),* $(,)? }) => {
		impl $crate::form::FormStruct for $ty {
			fn form_fields(&self) -> ::std::vec::Vec<$crate::form::Field<'_>> {
				::std::vec![$(
					$crate::form::Field {
						meta: $crate::form::FieldMeta {
							name: ::core::stringify!($field),
							tags: &[$($((::core::stringify!($tag), $raw)),*)?],
						},
						value: $crate::form::FormValue::form_value(&self.$field),
					}
				),*]
			}

			fn form_type_name(&self) -> &'static str {
				::core::stringify!($ty)
			}
		}

		impl $crate::form::FormValue for $ty {
			fn form_value(&self) -> $crate::form::Value<'_> {
				$crate::form::Value::Struct($crate::form::FormStruct::form_struct(self))
			}
		}
	};
}
