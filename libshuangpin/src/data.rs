//! Built-in scheme definitions.
//!
//! Each scheme is two raw record blocks in the loader's line format:
//! `key/follows/leads` and `code/syllable`. The first scheme listed by
//! `builtin_schemes` is the trainer default.

use crate::loader::RawScheme;

/// XiaoHe (小鹤) layout.
pub const XIAOHE_KEYS: &str = "\
q/iu/q
w/ei/w
e/e/
r/uan/r
t/ve/t
y/un/y
u/u/sh
i/i/ch
o/o,uo/
p/ie/p
a/a/
s/ong,iong/s
d/ai/d
f/en/f
g/eng/g
h/ang/h
j/an/j
k/ing,uai/k
l/iang,uang/l
z/ou/z
x/ia,ua/x
c/ao/c
v/v,ui/zh
b/in/b
n/iao/n
m/ian/m";

/// XiaoHe zero-initial codes: two-letter syllables spell themselves,
/// one-letter syllables double, three-letter syllables take first letter
/// plus their final's key.
pub const XIAOHE_ZERO: &str = "\
aa/a
ai/ai
an/an
ah/ang
ao/ao
ee/e
ei/ei
en/en
eg/eng
er/er
oo/o
ou/ou";

/// Microsoft (微软) layout.
pub const MICROSOFT_KEYS: &str = "\
q/iu/q
w/ia/w
e/e/
r/uan/r
t/ue/t
y/uai/y
u/u/sh
i/i/ch
o/o/
p/un/p
a/a/
s/ong/s
d/uang/d
f/en/f
g/eng/g
h/ang/h
j/an/j
k/ao/k
l/ai/l
z/ei/z
x/ie/x
c/iao/c
v/v/zh
b/ou/b
n/in/n
m/ian/m";

/// Microsoft zero-initial codes: `o` plus the final's key.
pub const MICROSOFT_ZERO: &str = "\
oa/a
ol/ai
oj/an
oh/ang
ok/ao
oe/e
oz/ei
of/en
og/eng
or/er
oo/o
ob/ou";

/// ZiRanMa (自然码) layout.
pub const ZIRANMA_KEYS: &str = "\
q/iu/q
w/en/w
e/e/
r/er/r
t/ue/t
y/ing/y
u/u/sh
i/i/ch
o/o/
p/ie/p
a/a/
s/ong/s
d/ao/d
f/an/f
g/ang/g
h/iang/h
j/ian/j
k/uai/k
l/uan/l
z/ou/z
x/uang/x
c/ua/c
v/v/zh
b/ia/b
n/iao/n
m/in/m";

/// ZiRanMa zero-initial codes: first letter plus last letter, doubled for
/// one-letter syllables.
pub const ZIRANMA_ZERO: &str = "\
aa/a
ai/ai
an/an
ag/ang
ao/ao
ee/e
ei/ei
en/en
eg/eng
er/er
oo/o
ou/ou";

/// Built-in schemes in precedence order; the first entry is the default
/// the registry falls back to.
pub fn builtin_schemes() -> Vec<(&'static str, RawScheme)> {
    vec![
        ("XiaoHe", RawScheme::from_text(XIAOHE_KEYS, XIAOHE_ZERO)),
        (
            "Microsoft",
            RawScheme::from_text(MICROSOFT_KEYS, MICROSOFT_ZERO),
        ),
        ("ZiRanMa", RawScheme::from_text(ZIRANMA_KEYS, ZIRANMA_ZERO)),
    ]
}
