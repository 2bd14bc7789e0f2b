//! Arity expansion. Every per-signature impl in the crate is stamped out through here.

/// Invokes `$m!(arity; A1 a1, A2 a2, ..)` for every supported arity.
///
/// The type/value identifier pairs let the callee spell both the generic
/// parameter list and the forwarded arguments.
macro_rules! for_each_arity {
    ($m:ident) => {
        $m!(0;);
        $m!(1; A1 a1);
        $m!(2; A1 a1, A2 a2);
        $m!(3; A1 a1, A2 a2, A3 a3);
        $m!(4; A1 a1, A2 a2, A3 a3, A4 a4);
        $m!(5; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
        $m!(6; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
    };
}

/// Highest parameter count a delegate signature may have.
pub const MAX_ARITY: usize = 6;
