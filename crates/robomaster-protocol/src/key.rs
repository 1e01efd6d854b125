//! 按键（Key）描述符
//!
//! 按键是机器人属性或动作的符号句柄：名称、32 位子类型、访问权限、值形状。
//! 注册表是封闭的（见 [`keys`](crate::keys)），按子类型做身份比较，
//! 通过 [`Key::from_sub_type`] 以 O(1) 查找。

use crate::ProtocolError;
use crate::keys;
use crate::value::ValueKind;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// 注册表基数
pub const KEY_COUNT: usize = 343;

/// 访问权限位掩码（Read = 1, Write = 2, Action = 4，可组合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessType(u8);

impl AccessType {
    pub const READ: AccessType = AccessType(1);
    pub const WRITE: AccessType = AccessType(2);
    pub const ACTION: AccessType = AccessType(4);
    pub const READ_WRITE: AccessType = AccessType(1 | 2);
    pub const WRITE_ACTION: AccessType = AccessType(2 | 4);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// 是否包含 `other` 中的全部权限位
    pub const fn contains(self, other: AccessType) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for AccessType {
    type Output = AccessType;

    fn bitor(self, rhs: AccessType) -> AccessType {
        AccessType(self.0 | rhs.0)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if self.contains(AccessType::READ) {
            parts.push("Read");
        }
        if self.contains(AccessType::WRITE) {
            parts.push("Write");
        }
        if self.contains(AccessType::ACTION) {
            parts.push("Action");
        }
        if parts.is_empty() {
            return f.write_str("None");
        }
        f.write_str(&parts.join("|"))
    }
}

/// 不可变按键描述符
#[derive(Debug, Clone, Copy)]
pub struct Key {
    name: &'static str,
    sub_type: u32,
    access: AccessType,
    kind: ValueKind,
}

impl Key {
    pub const fn new(name: &'static str, sub_type: u32, access: AccessType, kind: ValueKind) -> Self {
        Self {
            name,
            sub_type,
            access,
            kind,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn sub_type(&self) -> u32 {
        self.sub_type
    }

    pub fn access(&self) -> AccessType {
        self.access
    }

    /// 注册的值原型（结果解码与写入校验都以此为准）
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_readable(&self) -> bool {
        self.access.contains(AccessType::READ)
    }

    pub fn is_writable(&self) -> bool {
        self.access.contains(AccessType::WRITE)
    }

    pub fn is_action(&self) -> bool {
        self.access.contains(AccessType::ACTION)
    }

    /// 按子类型查找注册表中的按键
    pub fn from_sub_type(sub_type: u32) -> Result<&'static Key, ProtocolError> {
        registry()
            .get(&sub_type)
            .copied()
            .ok_or(ProtocolError::UnknownKey(sub_type))
    }

    /// 注册表全部按键
    pub fn all() -> &'static [Key] {
        &keys::ALL
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.sub_type == other.sub_type
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sub_type.hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.sub_type)
    }
}

/// 子类型 → 按键索引，首次访问时构建
///
/// 重复的子类型说明注册表损坏，直接 panic。
fn registry() -> &'static HashMap<u32, &'static Key> {
    static REGISTRY: OnceLock<HashMap<u32, &'static Key>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::with_capacity(KEY_COUNT);
        for key in keys::ALL.iter() {
            if let Some(previous) = map.insert(key.sub_type, key) {
                panic!("duplicate key sub-type {}: {} and {}", key.sub_type, previous, key);
            }
        }
        assert_eq!(map.len(), KEY_COUNT, "unexpected number of keys");
        map
    })
}
