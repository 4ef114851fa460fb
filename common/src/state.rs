//! 共有状態へのハンドル
//!
//! 画面の状態はシングルスレッドで共有される。非同期処理の待機中に他の
//! クリック処理が割り込むため、状態は短い同期区間でだけ読み書きし、
//! await をまたいで借用しない。

use std::cell::RefCell;
use std::rc::Rc;

/// 状態の読み書き
///
/// 状態がすでに破棄されている（画面が閉じられた）場合は `None` を返す。
pub trait StateCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for &C {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        (**self).read(f)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        (**self).mutate(f)
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for Rc<C> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        (**self).read(f)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        (**self).mutate(f)
    }
}
