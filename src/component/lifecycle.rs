//! 组件生命周期阶段
//!
//! ```text
//! Created ──bind──▶ Bound ──initialize──▶ Active
//!    │                │                     │
//!    └────────────────┴───────detach────────┴──▶ Detached
//! ```

use crate::core::error::LifecycleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleStage {
    /// 刚构造，没有光源句柄
    #[default]
    Created,
    /// 已获取句柄并完成首次数据绑定
    Bound,
    /// 已挂到变换节点
    Active,
    /// 已释放句柄
    Detached,
}

impl LifecycleStage {
    pub fn can_transition_to(self, next: LifecycleStage) -> bool {
        use LifecycleStage::*;
        matches!(
            (self, next),
            (Created, Bound) | (Bound, Active) | (Created | Bound | Active, Detached)
        )
    }

    /// 检查并执行迁移
    pub fn transition(&mut self, next: LifecycleStage) -> Result<(), LifecycleError> {
        if !self.can_transition_to(next) {
            return Err(LifecycleError::InvalidTransition { from: *self, to: next });
        }
        *self = next;
        Ok(())
    }

    /// 该阶段是否持有光源句柄
    pub fn holds_handle(self) -> bool {
        matches!(self, LifecycleStage::Bound | LifecycleStage::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        let mut stage = LifecycleStage::default();
        stage.transition(LifecycleStage::Bound).unwrap();
        stage.transition(LifecycleStage::Active).unwrap();
        stage.transition(LifecycleStage::Detached).unwrap();
        assert_eq!(stage, LifecycleStage::Detached);
    }

    #[test]
    fn test_out_of_order_rejected() {
        let mut stage = LifecycleStage::Created;
        assert_eq!(
            stage.transition(LifecycleStage::Active),
            Err(LifecycleError::InvalidTransition {
                from: LifecycleStage::Created,
                to: LifecycleStage::Active,
            })
        );
        assert_eq!(stage, LifecycleStage::Created);

        let mut stage = LifecycleStage::Detached;
        assert!(stage.transition(LifecycleStage::Bound).is_err());
        assert!(stage.transition(LifecycleStage::Detached).is_err());

        let mut stage = LifecycleStage::Active;
        assert!(stage.transition(LifecycleStage::Bound).is_err());
        assert!(stage.transition(LifecycleStage::Active).is_err());
    }

    #[test]
    fn test_holds_handle() {
        assert!(!LifecycleStage::Created.holds_handle());
        assert!(LifecycleStage::Bound.holds_handle());
        assert!(LifecycleStage::Active.holds_handle());
        assert!(!LifecycleStage::Detached.holds_handle());
    }
}
