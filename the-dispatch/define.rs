/// Generates the capability set from a list of event signatures.
///
/// Every entry `Name(arg: Type, ..);` produces:
///
/// - a `Capability::Name` variant,
/// - a single-method `NameHandler` trait with `handle_name`,
/// - an `as_name` probe on [`Observer`](crate::Observer),
/// - the `handle_name` method on the aggregate [`Handler`](crate::Handler),
/// - the no-op body for [`NopHandler`](crate::NopHandler),
/// - the fan-out body for [`PluginHandler`](crate::PluginHandler).
///
/// Arguments must be `Copy` or references, since the fan-out hands the same
/// payload to every capable plugin.
macro_rules! define_capabilities {
  (
    $(
      $(#[$meta:meta])*
      $cap:ident ( $( $arg:ident : $ty:ty ),* $(,)? );
    )*
  ) => {
    paste::paste! {
      /// Kinds of events a plugin can react to.
      #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
      pub enum Capability {
        $( $cap, )*
      }

      impl Capability {
        /// Every capability, in declaration order.
        pub const ALL: &'static [Capability] = &[ $( Capability::$cap, )* ];
        pub const COUNT: usize = Self::ALL.len();

        pub const fn name(self) -> &'static str {
          match self {
            $( Capability::$cap => stringify!($cap), )*
          }
        }

        /// Probes `observer` for this capability.
        pub fn is_implemented_by(self, observer: &dyn Observer) -> bool {
          match self {
            $( Capability::$cap => observer.[<as_ $cap:snake>]().is_some(), )*
          }
        }
      }

      $(
        #[doc = "Reacts to the `" $cap "` event."]
        pub trait [<$cap Handler>] {
          $(#[$meta])*
          fn [<handle_ $cap:snake>](&self, p: &mut dyn Player, $( $arg: $ty ),*);
        }
      )*

      /// Capability probes of a plugin.
      ///
      /// Each probe returns `None` unless the plugin opts in, which is what the
      /// [`capabilities!`](crate::capabilities) macro generates.
      pub trait Observer {
        $(
          fn [<as_ $cap:snake>](&self) -> Option<&dyn [<$cap Handler>]> {
            None
          }
        )*
      }

      /// The full event contract a player dispatches through.
      ///
      /// A player holds exactly one handler: [`NopHandler`] until plugins are
      /// attached, [`PluginHandler`] afterwards.
      pub trait Handler: Send + Sync {
        $(
          $(#[$meta])*
          fn [<handle_ $cap:snake>](&self, p: &mut dyn Player, $( $arg: $ty ),*);
        )*
      }

      impl Handler for NopHandler {
        $(
          #[allow(unused_variables)]
          fn [<handle_ $cap:snake>](&self, p: &mut dyn Player, $( $arg: $ty ),*) {}
        )*
      }

      impl Handler for PluginHandler {
        $(
          fn [<handle_ $cap:snake>](&self, p: &mut dyn Player, $( $arg: $ty ),*) {
            for entry in self.registry().capable(Capability::$cap) {
              if let Some(handler) = entry.plugin().[<as_ $cap:snake>]() {
                self.invoke(entry, Capability::$cap, || {
                  handler.[<handle_ $cap:snake>](p, $( $arg ),*)
                });
              }
            }
          }
        )*
      }
    }
  };
}

/// Implements [`Observer`](crate::Observer) for a plugin type, exposing the
/// listed capabilities.
///
/// ```
/// use the_core::Player;
/// use the_dispatch::{
///   QuitHandler,
///   capabilities,
/// };
///
/// struct Goodbye;
///
/// impl QuitHandler for Goodbye {
///   fn handle_quit(&self, p: &mut dyn Player) {
///     println!("{} left", p.name());
///   }
/// }
///
/// capabilities!(Goodbye => Quit);
/// ```
#[macro_export]
macro_rules! capabilities {
  ($ty:ty => $( $cap:ident ),* $(,)?) => {
    impl $crate::Observer for $ty {
      $crate::paste::paste! {
        $(
          fn [<as_ $cap:snake>](&self) -> ::std::option::Option<&dyn $crate::[<$cap Handler>]> {
            ::std::option::Option::Some(self)
          }
        )*
      }
    }
  };
}
